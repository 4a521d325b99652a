use anyhow::Result;
use rayon::prelude::*;

/// Execution mode for the transform chain.
#[derive(Clone, Copy, Debug)]
pub enum ExecMode {
    Sequential,
    Parallel {
        threads: Option<usize>,
        partitions: Option<usize>,
    },
}

/// Applies a per-record operation sequentially or over Rayon partitions.
///
/// The operation is a fallible filtering map: `Ok(None)` drops the record,
/// `Ok(Some(_))` emits one output, `Err(_)` aborts the whole run. The
/// operation must be pure over the single record it is given, so both modes
/// produce the same output (in input order) regardless of how the input is
/// partitioned.
pub struct Runner {
    pub mode: ExecMode,
    pub default_partitions: usize,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            mode: ExecMode::Parallel {
                threads: None,
                partitions: None,
            },
            default_partitions: 2 * num_cpus::get().max(2),
        }
    }
}

impl Runner {
    pub fn run<I, O, F>(&self, input: Vec<I>, op: F) -> Result<Vec<O>>
    where
        I: Send,
        O: Send,
        F: Fn(I) -> Result<Option<O>> + Send + Sync,
    {
        match self.mode {
            ExecMode::Sequential => apply_seq(input, &op),
            ExecMode::Parallel {
                threads,
                partitions,
            } => {
                if let Some(t) = threads {
                    // ok() to ignore "already built" on repeated calls in tests
                    rayon::ThreadPoolBuilder::new()
                        .num_threads(t)
                        .build_global()
                        .ok();
                }
                let parts = partitions.unwrap_or(self.default_partitions);
                apply_parallel(input, parts, &op)
            }
        }
    }
}

/// Sequential executor (single partition in-process)
fn apply_seq<I, O, F>(input: Vec<I>, op: &F) -> Result<Vec<O>>
where
    F: Fn(I) -> Result<Option<O>>,
{
    let mut out = Vec::with_capacity(input.len());
    for record in input {
        if let Some(v) = op(record)? {
            out.push(v);
        }
    }
    Ok(out)
}

/// Parallel executor (partition input → apply per partition → concatenate in
/// partition order). The first error from any partition fails the run.
fn apply_parallel<I, O, F>(input: Vec<I>, partitions: usize, op: &F) -> Result<Vec<O>>
where
    I: Send,
    O: Send,
    F: Fn(I) -> Result<Option<O>> + Send + Sync,
{
    let parts: Vec<Result<Vec<O>>> = split_vec(input, partitions)
        .into_par_iter()
        .map(|chunk| apply_seq(chunk, op))
        .collect();

    let mut out = Vec::new();
    for part in parts {
        out.extend(part?);
    }
    Ok(out)
}

/// Split a Vec into at most `n` contiguous non-empty partitions.
fn split_vec<T>(v: Vec<T>, n: usize) -> Vec<Vec<T>> {
    let len = v.len();
    if n <= 1 || len <= 1 {
        return vec![v];
    }
    let chunk = len.div_ceil(n);
    let mut out = Vec::with_capacity(n);
    let mut it = v.into_iter();
    loop {
        let part: Vec<T> = it.by_ref().take(chunk).collect();
        if part.is_empty() {
            break;
        }
        out.push(part);
    }
    out
}
