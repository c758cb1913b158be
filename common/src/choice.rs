//! 候補選択入力のパース

use crate::error::{Error, Result};

/// 入力文字列を `0..len` の番号として解釈
pub fn parse_choice(input: &str, len: usize) -> Result<usize> {
    let index: usize = input
        .trim()
        .parse()
        .map_err(|_| Error::InvalidChoice(format!("数値ではありません: '{}'", input.trim())))?;

    if index < len {
        Ok(index)
    } else {
        Err(Error::InvalidChoice(format!(
            "0〜{}の番号を入力してください",
            len.saturating_sub(1)
        )))
    }
}
