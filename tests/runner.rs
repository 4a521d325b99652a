use anyhow::anyhow;
use filmflow::runner::{ExecMode, Runner};

fn keep_even_times_ten(x: i64) -> anyhow::Result<Option<i64>> {
    Ok(if x % 2 == 0 { Some(x * 10) } else { None })
}

#[test]
fn sequential_filters_and_maps_in_order() -> anyhow::Result<()> {
    let r = Runner {
        mode: ExecMode::Sequential,
        ..Default::default()
    };
    let out = r.run((0..10).collect(), keep_even_times_ten)?;
    assert_eq!(out, vec![0, 20, 40, 60, 80]);
    Ok(())
}

#[test]
fn parallel_matches_sequential_output() -> anyhow::Result<()> {
    let input: Vec<i64> = (0..1000).collect();

    let seq = Runner {
        mode: ExecMode::Sequential,
        ..Default::default()
    }
    .run(input.clone(), keep_even_times_ten)?;

    let par = Runner {
        mode: ExecMode::Parallel {
            threads: None,
            partitions: Some(7),
        },
        ..Default::default()
    }
    .run(input, keep_even_times_ten)?;

    assert_eq!(seq, par);
    Ok(())
}

#[test]
fn more_partitions_than_records_is_fine() -> anyhow::Result<()> {
    let r = Runner {
        mode: ExecMode::Parallel {
            threads: None,
            partitions: Some(64),
        },
        ..Default::default()
    };
    let out = r.run(vec![1i64, 2, 3], keep_even_times_ten)?;
    assert_eq!(out, vec![20]);
    Ok(())
}

#[test]
fn empty_input_yields_empty_output() -> anyhow::Result<()> {
    let r = Runner::default();
    let out = r.run(Vec::<i64>::new(), keep_even_times_ten)?;
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn error_in_any_partition_aborts_the_run() {
    let op = |x: i64| {
        if x == 500 {
            Err(anyhow!("record 500 is broken"))
        } else {
            Ok(Some(x))
        }
    };

    for mode in [
        ExecMode::Sequential,
        ExecMode::Parallel {
            threads: None,
            partitions: Some(8),
        },
    ] {
        let r = Runner {
            mode,
            ..Default::default()
        };
        let err = r.run((0..1000).collect(), op).unwrap_err();
        assert!(format!("{err}").contains("record 500"));
    }
}
