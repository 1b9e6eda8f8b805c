use chrono::{Duration, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// Seven consecutive dates centered on `start`, three days either side.
pub fn date_range(start: NaiveDate) -> Vec<NaiveDate> {
    (-3..=3).map(|diff| start + Duration::days(diff)).collect()
}
