//! Static lookup tables behind the value converters.
//!
//! All lookups are case-insensitive. Functions return `None` when the input
//! is not recognized; the converter decides which default applies.

/// Prefixes of IANA zone names accepted verbatim.
const IANA_PREFIXES: &[&str] = &[
    "America/",
    "Europe/",
    "Asia/",
    "Pacific/",
    "Australia/",
    "Africa/",
    "Atlantic/",
    "Indian/",
    "Antarctica/",
    "Etc/",
];

/// RingCentral numeric timezone ids.
static RINGCENTRAL_TIMEZONE_IDS: &[(&str, &str)] = &[
    ("58", "America/New_York"),
    ("59", "America/Chicago"),
    ("60", "America/Denver"),
    ("61", "America/Los_Angeles"),
    ("62", "America/Phoenix"),
    ("63", "America/Anchorage"),
    ("64", "Pacific/Honolulu"),
];

static TIMEZONE_NAMES: &[(&str, &str)] = &[
    ("pacific standard time", "America/Los_Angeles"),
    ("pacific daylight time", "America/Los_Angeles"),
    ("mountain standard time", "America/Denver"),
    ("mountain daylight time", "America/Denver"),
    ("central standard time", "America/Chicago"),
    ("central daylight time", "America/Chicago"),
    ("eastern standard time", "America/New_York"),
    ("eastern daylight time", "America/New_York"),
    ("atlantic standard time", "America/Halifax"),
    ("atlantic daylight time", "America/Halifax"),
    ("alaska standard time", "America/Anchorage"),
    ("alaska daylight time", "America/Anchorage"),
    ("hawaii standard time", "Pacific/Honolulu"),
    ("hawaii daylight time", "Pacific/Honolulu"),
    ("greenwich mean time", "Europe/London"),
    ("british summer time", "Europe/London"),
    ("central european time", "Europe/Paris"),
    ("central european summer time", "Europe/Paris"),
    ("eastern european time", "Europe/Bucharest"),
    ("eastern european summer time", "Europe/Bucharest"),
    ("japan standard time", "Asia/Tokyo"),
    ("china standard time", "Asia/Shanghai"),
    ("australian eastern standard time", "Australia/Sydney"),
    ("australian eastern daylight time", "Australia/Sydney"),
    ("eastern time", "America/New_York"),
    ("central time", "America/Chicago"),
    ("mountain time", "America/Denver"),
    ("pacific time", "America/Los_Angeles"),
    ("alaska time", "America/Anchorage"),
    ("hawaii time", "Pacific/Honolulu"),
    ("arizona", "America/Phoenix"),
    ("utc", "UTC"),
    ("gmt", "UTC"),
    ("pst", "America/Los_Angeles"),
    ("pdt", "America/Los_Angeles"),
    ("mst", "America/Denver"),
    ("mdt", "America/Denver"),
    ("cst", "America/Chicago"),
    ("cdt", "America/Chicago"),
    ("est", "America/New_York"),
    ("edt", "America/New_York"),
];

/// Substring fallbacks tried after the exact tables.
static TIMEZONE_KEYWORDS: &[(&str, &str)] = &[
    ("pacific", "America/Los_Angeles"),
    ("mountain", "America/Denver"),
    ("central", "America/Chicago"),
    ("eastern", "America/New_York"),
    ("alaska", "America/Anchorage"),
    ("hawaii", "Pacific/Honolulu"),
];

pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

static COUNTRY_CODES: &[(&str, &str)] = &[
    ("united states", "US"),
    ("united states of america", "US"),
    ("usa", "US"),
    ("us", "US"),
    ("canada", "CA"),
    ("united kingdom", "GB"),
    ("great britain", "GB"),
    ("uk", "GB"),
    ("australia", "AU"),
    ("germany", "DE"),
    ("france", "FR"),
    ("japan", "JP"),
    ("china", "CN"),
    ("india", "IN"),
    ("brazil", "BR"),
    ("mexico", "MX"),
];

pub const DEFAULT_COUNTRY: &str = "US";

/// Zoom user `type` codes keyed by normalized vendor or SSOT role names.
static USER_TYPES: &[(&str, i64)] = &[
    ("user", 1),
    ("basic", 1),
    ("basicuser", 1),
    ("flexibleuser", 1),
    ("admin", 2),
    ("licensed", 2),
    ("digitaluser", 2),
    ("other", 99),
    ("none", 99),
    ("department", 99),
    ("announcement", 99),
    ("voicemail", 99),
    ("sharedlinesgroup", 99),
    ("pagingonly", 99),
    ("ivrmenu", 99),
    ("applicationextension", 99),
    ("parklocation", 99),
    ("limited", 99),
    ("limiteduser", 99),
    ("faxuser", 99),
    ("virtualuser", 99),
];

pub const DEFAULT_USER_TYPE: i64 = 1;

static ZOOM_USER_ROLES: &[(i64, &str)] = &[(1, "user"), (2, "admin"), (99, "other")];

pub const DEFAULT_USER_ROLE: &str = "user";

static PHONE_TYPES: &[(&str, &str)] = &[
    ("work", "office"),
    ("business", "office"),
    ("direct", "office"),
    ("office", "office"),
    ("home", "home"),
    ("mobile", "mobile"),
    ("cell", "mobile"),
];

pub const DEFAULT_PHONE_TYPE: &str = "office";

static IVR_KEYS: &[(&str, &str)] = &[
    ("star", "*"),
    ("hash", "#"),
    ("pound", "#"),
    ("noinput", "timeout"),
];

/// Title-cased street words written in capitals anywhere after the first word.
static ADDRESS_ABBREVIATIONS: &[&str] = &[
    "Po", "Ne", "Nw", "Se", "Sw", "Ct", "St", "Ave", "Blvd", "Dr", "Ln", "Rd", "Apt", "Ste",
];

/// Abbreviations also capitalized when they end the line.
static ADDRESS_TRAILING_ABBREVIATIONS: &[&str] = &["Ct", "St", "Ave", "Blvd", "Dr", "Ln", "Rd"];

/// Lowercase and strip everything but ASCII alphanumerics.
pub(crate) fn normalize_token(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn find<'a, V: Copy>(table: &'a [(&'a str, V)], key: &str) -> Option<V> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| *value)
}

pub fn is_iana_timezone(value: &str) -> bool {
    value == "UTC" || IANA_PREFIXES.iter().any(|prefix| value.starts_with(prefix))
}

/// Resolve a vendor timezone name or id to an IANA zone.
pub fn iana_timezone(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_iana_timezone(trimmed) {
        return Some(trimmed.to_string());
    }
    if let Some(zone) = find(RINGCENTRAL_TIMEZONE_IDS, trimmed) {
        return Some(zone.to_string());
    }
    if let Some(zone) = find(TIMEZONE_NAMES, trimmed) {
        return Some(zone.to_string());
    }
    let lowered = trimmed.to_ascii_lowercase();
    TIMEZONE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, zone)| zone.to_string())
}

/// ISO 3166-1 alpha-2 code for a country name.
pub fn iso_country(value: &str) -> Option<&'static str> {
    find(COUNTRY_CODES, value.trim())
}

pub fn zoom_user_type(value: &str) -> Option<i64> {
    find(USER_TYPES, &normalize_token(value))
}

pub fn is_zoom_user_type(code: i64) -> bool {
    ZOOM_USER_ROLES.iter().any(|(known, _)| *known == code)
}

pub fn ssot_user_role(code: i64) -> Option<&'static str> {
    ZOOM_USER_ROLES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, role)| *role)
}

pub fn zoom_phone_type(value: &str) -> Option<&'static str> {
    find(PHONE_TYPES, value.trim())
}

/// Zoom key for a vendor IVR input name; unknown inputs are returned as is.
pub fn zoom_ivr_key(value: &str) -> String {
    find(IVR_KEYS, &normalize_token(value))
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

/// Title-case an address line and capitalize street abbreviations.
///
/// The first word is never treated as an abbreviation ("St Louis Rd" keeps
/// its leading "St"), and a word that ends the line is only capitalized when
/// it is a street suffix.
pub fn normalize_address_line(value: &str) -> String {
    let titled = title_case(value);
    let words: Vec<&str> = titled.split(' ').collect();
    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let table = if index == last {
                ADDRESS_TRAILING_ABBREVIATIONS
            } else {
                ADDRESS_ABBREVIATIONS
            };
            if index > 0 && table.contains(word) {
                word.to_uppercase()
            } else {
                (*word).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first letter of every alphanumeric run, lowercase the rest.
fn title_case(value: &str) -> String {
    let mut titled = String::with_capacity(value.len());
    let mut in_word = false;
    for c in value.chars() {
        if in_word {
            titled.extend(c.to_lowercase());
        } else {
            titled.extend(c.to_uppercase());
        }
        in_word = c.is_alphanumeric() || c == '\'';
    }
    titled
}
