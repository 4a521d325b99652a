//! Test fixtures for pipeline tests.

use crate::record::RawRecord;

/// A conclusive, complete raw record; tests override individual fields.
pub fn raw_record() -> RawRecord {
    RawRecord {
        year: "2013".to_string(),
        imdb: "tt001".to_string(),
        title: "Foo".to_string(),
        test: "x".to_string(),
        clean_test: "clean".to_string(),
        binary: "PASS".to_string(),
        code: "c".to_string(),
        budget: "b".to_string(),
        domgross: Some("100".to_string()),
        intgross: "i".to_string(),
        budget_2013: Some("5000000".to_string()),
        domgross_2013: None,
        intgross_2013: Some("7000000".to_string()),
        period_code: "1".to_string(),
        decade_code: "2000".to_string(),
    }
}

/// Header row matching [`RawRecord`]'s expected columns.
pub const CSV_HEADER: &str =
    "year,imdb,title,test,clean_test,binary,code,budget,domgross,intgross,budget_2013$,domgross_2013$,intgross_2013$,period code,decade code";
