use super::normalizer::normalize_label;
use crate::workflows::sliding_fee::Frequency;
use std::collections::HashMap;
use std::sync::OnceLock;

static FREQUENCY_LABEL_MAP: OnceLock<HashMap<String, Frequency>> = OnceLock::new();

pub(crate) fn frequency_for_label(label: &str) -> Option<Frequency> {
    frequency_label_map().get(&normalize_label(label)).copied()
}

fn frequency_label_map() -> &'static HashMap<String, Frequency> {
    FREQUENCY_LABEL_MAP.get_or_init(|| {
        const ALIASES: &[(&str, Frequency)] = &[
            ("Hourly Daily", Frequency::HourlyDaily),
            ("Hourly - Daily", Frequency::HourlyDaily),
            ("Hourly Weekly", Frequency::HourlyWeekly),
            ("Hourly - Weekly", Frequency::HourlyWeekly),
            ("Hourly Monthly", Frequency::HourlyMonthly),
            ("Hourly - Monthly", Frequency::HourlyMonthly),
            ("Bi-weekly", Frequency::Biweekly),
            ("Every two weeks", Frequency::Biweekly),
            ("Quarter", Frequency::Quarterly),
            ("Annual", Frequency::Yearly),
            ("Annually", Frequency::Yearly),
        ];

        let mut map = HashMap::with_capacity(Frequency::ALL.len() * 2 + ALIASES.len());
        for frequency in Frequency::ALL {
            map.insert(normalize_label(frequency.label()), frequency);
            map.insert(normalize_label(frequency.key()), frequency);
        }
        for (alias, frequency) in ALIASES {
            map.insert(normalize_label(alias), *frequency);
        }
        map
    })
}
