/// Swap the ASCII operators for their display glyphs.
///
/// Cosmetic only; [`normalize`](crate::expression::normalize) reverses it
/// exactly.
pub fn format_for_display(expr: &str) -> String {
    expr.replace('*', "×").replace('/', "÷")
}
