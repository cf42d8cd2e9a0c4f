//! 曆表數據的字典解壓。
//!
//! 數據形如 `正文&條目/條目/…`。第 `i` 個字典條目的鍵為碼位 `max_key - i` 的單字，
//! 解壓時依條目次序（即鍵碼由大到小）逐一將正文中的鍵全數替換為條目內容。
//! 條目內容可含碼位較小的鍵，由後續替換展開，故次序不可更改。

/// 正文與字典的分隔符。
pub const SECTION_SEPARATOR: char = '&';
/// 字典條目的分隔符。
pub const ENTRY_SEPARATOR: char = '/';

/// 依次排列的字典，`(鍵, 內容)`。
pub type Dictionary<'a> = Vec<(char, &'a str)>;

/// 將數據拆為正文與字典，並為字典條目分配鍵。
///
/// 無分隔符則視整段為正文、字典為空。
pub fn split(encoded: &str, max_key: u32) -> (&str, Dictionary<'_>) {
    let Some((body, entries)) = encoded.split_once(SECTION_SEPARATOR) else {
        return (encoded, Vec::new());
    };
    let dictionary = (0..)
        .zip(entries.split(ENTRY_SEPARATOR))
        .filter_map(|(i, entry)| {
            let key = max_key.checked_sub(i).and_then(char::from_u32)?;
            Some((key, entry))
        })
        .collect();
    (body, dictionary)
}

/// 解壓數據，返回逐字序列。
///
/// # 用例
///
/// ```
/// use teac::lunisolar::codec;
///
/// // `B` 先展開為 `1A`，其中的 `A` 再展開為 `22`
/// let symbols = codec::decode("B0A&1A/22", 66);
/// assert_eq!(vec!['1', '2', '2', '0', '2', '2'], symbols);
/// ```
pub fn decode(encoded: &str, max_key: u32) -> Vec<char> {
    let (body, dictionary) = split(encoded, max_key);
    let mut text = body.to_owned();
    for (key, entry) in &dictionary {
        text = text.replace(*key, entry);
    }
    text.chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lunisolar::data;

    #[test]
    fn keys_descend() {
        let (body, dict) = split("PO&ab/cd/e", 80);
        assert_eq!("PO", body);
        assert_eq!(vec![('P', "ab"), ('O', "cd"), ('N', "e")], dict);
    }

    #[test]
    fn no_dictionary() {
        assert_eq!(vec!['4', '2'], decode("42", 90));
    }

    #[test]
    fn order_matters() {
        // the later, smaller key is expanded inside the earlier entry
        assert_eq!(vec!['y', 'x', 'y', 'x'], decode("BB&yA/x", 66));
    }

    #[test]
    fn embedded_sizes() {
        let new_years = decode(data::NEW_YEARS, data::NEW_YEARS_MAX_KEY);
        let moon = decode(data::MOON_PHASES, data::MOON_PHASES_MAX_KEY);
        let leaps = decode(data::LEAP_MONTHS, data::LEAP_MONTHS_MAX_KEY);
        assert_eq!(517, new_years.len());
        assert_eq!(1541, moon.len());
        assert_eq!(191, leaps.len());
        assert_eq!("928108019291", new_years[..12].iter().collect::<String>());
        assert_eq!("2m63o842m63o", leaps[..12].iter().collect::<String>());
        assert_eq!("232314341143", moon[..12].iter().collect::<String>());
    }
}
