/// Number of months covered by the commission time series by default.
pub const DEFAULT_SERIES_MONTHS: u32 = 6;

/// Declared-value threshold separating the building-savings commission tiers.
pub const BUILDING_SAVINGS_TIER_THRESHOLD: u64 = 500_000;

/// Short Czech month labels used by the commission time series, January first.
pub const MONTH_LABELS_CS: [&str; 12] = [
    "Led", "Úno", "Bře", "Dub", "Kvě", "Čer", "Čvc", "Srp", "Zář", "Říj", "Lis", "Pro",
];

/// Fixed key under which the signed-in user profile is persisted.
pub const SESSION_STORAGE_KEY: &str = "advisor.user";
