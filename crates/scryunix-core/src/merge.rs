//! Column-wise merge of two rendered faces.

use crate::block::RenderedBlock;

/// Places `right` beside `left`, line by line.
///
/// Once the shorter block runs out, leftover lines of `left` pass through
/// unchanged. Leftover lines of `right` are shifted by `column_width`
/// spaces so they stay in the right-hand column.
pub fn merge(left: &RenderedBlock, right: &RenderedBlock, column_width: usize) -> RenderedBlock {
    let shared = left.len().min(right.len());
    let mut merged: Vec<String> = left
        .lines()
        .iter()
        .zip(right.lines())
        .map(|(l, r)| format!("{l}{r}"))
        .collect();

    if right.len() <= left.len() {
        merged.extend(left.lines()[shared..].iter().cloned());
    } else {
        let indent = " ".repeat(column_width);
        merged.extend(
            right.lines()[shared..]
                .iter()
                .map(|line| format!("{indent}{line}")),
        );
    }
    RenderedBlock::from(merged)
}
