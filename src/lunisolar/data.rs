//! 壓縮曆表數據
//!
//! 每組數據以 `&` 分隔正文與字典，字典條目以 `/` 分隔，解碼方式見 [`super::codec`]。

/// 各年正月初一的公曆日序增減量，字典首鍵碼位 `P`。
pub const NEW_YEARS: &str = "928DEPB0NGMCA17EA039NKILKJB1zA117ELBCPFAAOAKMAKJLGELAAFMJFLADAPFEPDD2OOEGM0N\
    GINAILAIFNIDCPAEM1070NGMCAMACMAKBLAJLKABLJ017LEBALFAKOBANDKALGANG12zDMAFLIEA\
    PDC28FEIOCGMCAMAC128NKID1zIBNABCPBELBACMAKOBAJLKALGJFLA107LAFA&29/08/09/18/1\
    9/209/029/129/218/219/018/019/108/109/118/119";
/// 字典首鍵碼位。
pub const NEW_YEARS_MAX_KEY: u32 = 80;

/// 大小月序列中插入點的間距，字典首鍵碼位 `ú`。
pub const MOON_PHASES: &str = "½½ïÃ3å3¼¿ÏÒf5½½ÙëÍ8ÐÀðÚíÍíá8çÀñÂÂØàÂå52aÊ8ÑÙÒÚ8ÐèéÜØøùÅÄ¿8ç6çÃ1ñòÑÅÙÈfêÅÙÀ¾Í\
    Ô÷ÜÉ¿ÑôhôÜóÎÆÆÂÛãîÆ6çÃß×ãîÕÉÂäõÊ5½îÕÉÈêÚÀÒ×ÍÔÞ1É½×êÚÞÎ1ÉÐôaÝÀØ1óÓ¼ÆÂÈ1óÖÂòÅã\
    îèÇÖÒêÚÀð×fhÀÞÎÅÊ5½fÆÞÎÏâ6çÂåÑÏÖÂäåßÏëßßÙÖèÇÖúÊ8hâÀìáâöÂÈàÀÂäåÑÏëÍÙëÊ8hôÜúêf\
    ÜØÎáÆöòïõÑÙèÙëÍéÜÌÄøââÜñ8çå3ñòÑï2aêÅÙÒÚ÷æÑ1Ý½ÚæãÎùîÄ¿8&ðÍÜì/ÆâÂÛÑ/×ÚæÑÎ/éÆèé\
    /ÆØàÂ/28528/8½/É¿ã/Èß/ØÅá/Þ×/àÀä/1¿É/æ16ÄÎ/ÌÄÎ/ÖÈ/Êa/8¿/ÒÍ/45/ÆÛ/46/¾5/3¿¼/8\
    Ý/ÅÆ/ÅÏ/3Ã/Ì8/25/ÆÀ/ÌÕ/fÔ/ÄÐ/ÂË/1Ã/ÓÉ/Ê1/a½/1½/ÀÈ/3Ë/¿Ç/ÅÇ/Á½/ff/À6/¼½/32/61\
    /ÂÃ/Ä¼/8¼/Á¿/3½/48/¾3/1¼/¾1/41/66/23/43";
/// 字典首鍵碼位。
pub const MOON_PHASES_MAX_KEY: u32 = 250;

/// 閏月所在及其與前一閏年的間距，字典首鍵碼位 `K`。
pub const LEAP_MONTHS: &str = "2IIn64o841o6KlE3kE3GmE4mHn6DBFJ2jCB4mE4l7Dl54n6DBJl5F52BKGl64n6Dl5AB4m6JoHGG\
    l6A&Jk6AB3/FD/m63o8A/652B3/lE4/Aj/6CB/53/43/k5/42";
/// 字典首鍵碼位。
pub const LEAP_MONTHS_MAX_KEY: u32 = 75;
