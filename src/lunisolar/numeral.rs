//! 三組曆表數據共用的三十二進制數碼。
//!
//! 數碼為 `0-9` 接 `a-v`，各組數據在此之上另有偏移或正負約定，皆以具名函數寫出。

/// 三十二進制。
pub const RADIX: u32 = 32;

/// 正月初一增減量中代表 20 的特殊符號。
pub const NEW_YEAR_SENTINEL: char = 'z';

/// 閏月符號自此值起表示與前一閏年僅隔兩年。
pub const SHORT_STRIDE_FROM: u32 = 14;

/// 解讀單個三十二進制數碼，不分大小寫。
///
/// # 用例
///
/// ```
/// use teac::lunisolar::numeral;
///
/// assert_eq!(Some(7), numeral::value('7'));
/// assert_eq!(Some(22), numeral::value('m'));
/// assert_eq!(None, numeral::value('z'));
/// ```
pub fn value(c: char) -> Option<u32> {
    c.to_digit(RADIX)
}

/// 正月初一增減量的大小：特殊符號為 20，其餘為數碼加 10。
///
/// 大小不足 15 者為減，否則為增，見 [`new_year_delta`]。
pub fn new_year_magnitude(c: char) -> Option<u32> {
    if c == NEW_YEAR_SENTINEL {
        Some(20)
    } else {
        value(c).map(|v| v + 10)
    }
}

/// 正月初一相對前一年的帶號增減量。
///
/// ```
/// use teac::lunisolar::numeral;
///
/// assert_eq!(Some(19), numeral::new_year_delta('9'));
/// assert_eq!(Some(-13), numeral::new_year_delta('3'));
/// assert_eq!(Some(20), numeral::new_year_delta('z'));
/// ```
pub fn new_year_delta(c: char) -> Option<i32> {
    let m = new_year_magnitude(c)? as i32;
    Some(if m < 15 { -m } else { m })
}

/// 大小月序列中相鄰兩插入點的間距。
pub fn insertion_offset(c: char) -> Option<usize> {
    value(c).map(|v| v as usize)
}

/// 閏月符號，返回 `(距前一閏年的年數, 閏月序號)`。
///
/// ```
/// use teac::lunisolar::numeral;
///
/// assert_eq!(Some((3, 2)), numeral::leap_step('2'));
/// assert_eq!(Some((2, 9)), numeral::leap_step('m'));
/// ```
pub fn leap_step(c: char) -> Option<(i32, u32)> {
    let v = value(c)?;
    Some(if v < SHORT_STRIDE_FROM {
        (3, v)
    } else {
        (2, v - 13)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        for (std, c) in [(0, '0'), (9, '9'), (10, 'a'), (31, 'v'), (31, 'V')] {
            assert_eq!(Some(std), value(c));
        }
        assert_eq!(None, value('w'));
        assert_eq!(None, value('½'));
    }

    #[test]
    fn new_year_sign() {
        // 0..=4 shrink the running offset, 5..=9 and the sentinel grow it
        assert_eq!(Some(-10), new_year_delta('0'));
        assert_eq!(Some(-14), new_year_delta('4'));
        assert_eq!(Some(15), new_year_delta('5'));
        assert_eq!(None, new_year_delta('&'));
    }

    #[test]
    fn leap_strides() {
        assert_eq!(Some((3, 13)), leap_step('d'));
        assert_eq!(Some((2, 1)), leap_step('e'));
        assert_eq!(Some((2, 11)), leap_step('o'));
    }
}
