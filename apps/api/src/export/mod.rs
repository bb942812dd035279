// Note export: Helvetica metrics, page layout and the lopdf writer behind POST /api/export/pdf.

pub mod font_metrics;
pub mod handlers;
pub mod pdf;
