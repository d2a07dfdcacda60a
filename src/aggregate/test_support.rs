use chrono::NaiveDate;

use crate::model::{DayRecord, HourRecord, Season, Weather};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn day(date: NaiveDate, casual: u64, registered: u64) -> DayRecord {
    DayRecord {
        date,
        season: Season::Spring,
        weather: Weather::ClearPartlyCloudy,
        holiday: false,
        workingday: true,
        year: chrono::Datelike::year(&date),
        casual,
        registered,
        count: casual + registered,
    }
}

pub fn hour(date: NaiveDate, hour: u8, casual: u64, registered: u64) -> HourRecord {
    HourRecord {
        date,
        hour,
        casual,
        registered,
        count: casual + registered,
    }
}
