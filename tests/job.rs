use filmflow::io::parquet::read_parquet_vec;
use filmflow::record::FilmRow;
use filmflow::runner::{ExecMode, Runner};
use filmflow::table::{ParquetSink, TableRef};
use filmflow::testing::CSV_HEADER;
use filmflow::job;
use std::fs;
use std::path::PathBuf;

fn sequential() -> Runner {
    Runner {
        mode: ExecMode::Sequential,
        ..Default::default()
    }
}

fn write_source(dir: &std::path::Path, rows: &[&str]) -> anyhow::Result<PathBuf> {
    let path = dir.join("movies.csv");
    let mut contents = String::from(CSV_HEADER);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    contents.push('\n');
    fs::write(&path, contents)?;
    Ok(path)
}

const ROW_FOO: &str = "2013,tt001,Foo,x,clean,PASS,c,b,100,i,5000000,#N/A,7000000,1,2000";
const ROW_DUBIOUS: &str = "2010,tt003,Baz,x,dubious,FAIL,c,b,50,i,100,200,300,1,2010";
const ROW_NO_GROSS: &str = "2011,tt004,Qux,x,clean,PASS,c,b,#N/A,i,100,200,300,1,2010";
const ROW_BAR: &str = "1995,tt002,Bar,ok,ok,FAIL,d,x,200,y,1000,2000,3000,2,1990";

fn expected_foo() -> FilmRow {
    FilmRow {
        year: Some(2013),
        imdb: "tt001".to_string(),
        title: "Foo".to_string(),
        test: "clean".to_string(),
        budget: Some(5_000_000),
        domgross: None,
        intgross: Some(7_000_000),
    }
}

fn expected_bar() -> FilmRow {
    FilmRow {
        year: Some(1995),
        imdb: "tt002".to_string(),
        title: "Bar".to_string(),
        test: "ok".to_string(),
        budget: Some(1000),
        domgross: Some(2000),
        intgross: Some(3000),
    }
}

#[test]
fn end_to_end_load() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let src = write_source(tmp.path(), &[ROW_FOO, ROW_DUBIOUS, ROW_NO_GROSS, ROW_BAR])?;

    let table: TableRef = "proj:films.bechdel".parse()?;
    let sink = ParquetSink::new(tmp.path().join("warehouse"), table);

    let summary = job::run(&src, &sink, &sequential())?;
    assert_eq!(summary.rows_read, 4);
    assert_eq!(summary.rows_loaded, 2);

    let loaded: Vec<FilmRow> = read_parquet_vec(sink.destination())?;
    assert_eq!(loaded, vec![expected_foo(), expected_bar()]);
    Ok(())
}

#[test]
fn parallel_load_matches_sequential() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let src = write_source(tmp.path(), &[ROW_FOO, ROW_DUBIOUS, ROW_NO_GROSS, ROW_BAR])?;

    let table: TableRef = "proj:films.bechdel_par".parse()?;
    let sink = ParquetSink::new(tmp.path().join("warehouse"), table);
    let runner = Runner {
        mode: ExecMode::Parallel {
            threads: None,
            partitions: Some(3),
        },
        ..Default::default()
    };

    let summary = job::run(&src, &sink, &runner)?;
    assert_eq!(summary.rows_loaded, 2);

    let loaded: Vec<FilmRow> = read_parquet_vec(sink.destination())?;
    assert_eq!(loaded, vec![expected_foo(), expected_bar()]);
    Ok(())
}

#[test]
fn second_load_truncates_the_destination() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let table: TableRef = "proj:films.bechdel_trunc".parse()?;
    let sink = ParquetSink::new(tmp.path().join("warehouse"), table);

    let first = write_source(tmp.path(), &[ROW_FOO, ROW_BAR])?;
    job::run(&first, &sink, &sequential())?;
    assert_eq!(read_parquet_vec::<FilmRow>(sink.destination())?.len(), 2);

    let second = write_source(tmp.path(), &[ROW_BAR])?;
    job::run(&second, &sink, &sequential())?;

    let loaded: Vec<FilmRow> = read_parquet_vec(sink.destination())?;
    assert_eq!(loaded, vec![expected_bar()]);
    Ok(())
}

#[test]
fn dubious_only_input_loads_zero_rows() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let src = write_source(tmp.path(), &[ROW_DUBIOUS])?;

    let table: TableRef = "proj:films.bechdel_empty".parse()?;
    let sink = ParquetSink::new(tmp.path().join("warehouse"), table);

    let summary = job::run(&src, &sink, &sequential())?;
    assert_eq!(summary.rows_read, 1);
    assert_eq!(summary.rows_loaded, 0);
    assert!(read_parquet_vec::<FilmRow>(sink.destination())?.is_empty());
    Ok(())
}

#[test]
fn malformed_numeric_aborts_the_run() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let bad = "2013,tt009,Bad,x,clean,PASS,c,b,100,i,12.5,#N/A,7000000,1,2000";
    let src = write_source(tmp.path(), &[ROW_FOO, bad])?;

    let table: TableRef = "proj:films.bechdel_bad".parse()?;
    let sink = ParquetSink::new(tmp.path().join("warehouse"), table);

    let err = job::run(&src, &sink, &sequential()).unwrap_err();
    let msg = format!("{err:?}");
    assert!(msg.contains("budget"), "unexpected error: {msg}");
    // Nothing was loaded.
    assert!(!sink.destination().exists());
    Ok(())
}
