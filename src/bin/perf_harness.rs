use std::env;
use std::hint::black_box;
use std::process;
use std::time::Instant;

use bounded_search::{
    for_each_while, max_element_bounded, min_element_bounded, min_element_bounded_by,
};

const DEFAULT_SEED: u64 = 0x1234_5678_9ABC_DEF0;

#[derive(Clone, Copy)]
enum Bench {
    MinBoundedEarly,
    MinBoundedWorst,
    MaxBoundedEarly,
    MaxBoundedWorst,
    MinFullScan,
    MaxFullScan,
    ForEachWhileHalf,
    ForEachWhileAll,
}

#[derive(Clone, Copy)]
struct Config {
    bench: Bench,
    len: usize,
    iters: usize,
    seed: u64,
    verify: bool,
    report: bool,
}

fn main() {
    let config = match parse_args() {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            print_usage(&program_name());
            process::exit(2);
        }
    };

    if config.verify {
        verify_bench(config.bench);
    }

    run_bench(config);
}

fn parse_args() -> Result<Config, String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "perf_harness".to_string());

    let mut bench = None;
    let mut len = None;
    let mut iters = None;
    let mut seed = DEFAULT_SEED;
    let mut verify = false;
    let mut report = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bench" => {
                let name = args.next().ok_or("--bench requires a value")?;
                let parsed = parse_bench(&name).ok_or_else(|| format!("unknown bench: {name}"))?;
                bench = Some(parsed);
            }
            "--len" => {
                let value = args.next().ok_or("--len requires a value")?;
                len = Some(parse_usize(&value, "--len")?);
            }
            "--iters" => {
                let value = args.next().ok_or("--iters requires a value")?;
                iters = Some(parse_usize(&value, "--iters")?);
            }
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                seed = parse_u64(&value, "--seed")?;
            }
            "--verify" => verify = true,
            "--report" => report = true,
            "--no-report" => report = false,
            "--list" => {
                list_benches();
                process::exit(0);
            }
            "-h" | "--help" => {
                print_usage(&program);
                process::exit(0);
            }
            _ => return Err(format!("unknown argument: {arg}")),
        }
    }

    let bench = bench.ok_or("missing --bench")?;
    let len = len.unwrap_or(1_000_000);
    let iters = iters.unwrap_or_else(|| bench.default_iters());

    Ok(Config {
        bench,
        len,
        iters,
        seed,
        verify,
        report,
    })
}

fn program_name() -> String {
    env::args()
        .next()
        .unwrap_or_else(|| "perf_harness".to_string())
}

fn print_usage(program: &str) {
    eprintln!(
        "\
Usage:
  {program} --bench <name> [--len N] [--iters N] [--seed N] [--verify]
  {program} --list

Options:
  --bench <name>   Benchmark to run (see --list)
  --len N          Input length in elements (default: 1000000)
  --iters N        Iterations (bench-specific default)
  --seed N         RNG seed (default: 0x123456789ABCDEF0)
  --verify         Run a quick correctness check before benchmarking
  --report         Print throughput summary after the run
  --no-report      Disable throughput summary
  --list           Show available benches
"
    );
}

fn list_benches() {
    println!("min_bounded_early");
    println!("min_bounded_worst");
    println!("max_bounded_early");
    println!("max_bounded_worst");
    println!("min_full_scan");
    println!("max_full_scan");
    println!("for_each_while_half");
    println!("for_each_while_all");
}

fn parse_bench(name: &str) -> Option<Bench> {
    match name {
        "min_bounded_early" => Some(Bench::MinBoundedEarly),
        "min_bounded_worst" => Some(Bench::MinBoundedWorst),
        "max_bounded_early" => Some(Bench::MaxBoundedEarly),
        "max_bounded_worst" => Some(Bench::MaxBoundedWorst),
        "min_full_scan" => Some(Bench::MinFullScan),
        "max_full_scan" => Some(Bench::MaxFullScan),
        "for_each_while_half" => Some(Bench::ForEachWhileHalf),
        "for_each_while_all" => Some(Bench::ForEachWhileAll),
        _ => None,
    }
}

impl Bench {
    fn default_iters(self) -> usize {
        match self {
            // The early-exit variants finish almost immediately per call.
            Bench::MinBoundedEarly | Bench::MaxBoundedEarly => 10_000,
            Bench::MinBoundedWorst
            | Bench::MaxBoundedWorst
            | Bench::MinFullScan
            | Bench::MaxFullScan
            | Bench::ForEachWhileHalf
            | Bench::ForEachWhileAll => 10,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Bench::MinBoundedEarly => "min_bounded_early",
            Bench::MinBoundedWorst => "min_bounded_worst",
            Bench::MaxBoundedEarly => "max_bounded_early",
            Bench::MaxBoundedWorst => "max_bounded_worst",
            Bench::MinFullScan => "min_full_scan",
            Bench::MaxFullScan => "max_full_scan",
            Bench::ForEachWhileHalf => "for_each_while_half",
            Bench::ForEachWhileAll => "for_each_while_all",
        }
    }
}

fn parse_usize(value: &str, flag: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{flag} expects a non-negative integer"))
}

fn parse_u64(value: &str, flag: &str) -> Result<u64, String> {
    value
        .parse::<u64>()
        .map_err(|_| format!("{flag} expects a non-negative integer"))
}

#[inline]
fn next_u64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

fn make_i32_input(len: usize, seed: u64) -> Vec<i32> {
    let mut state = seed;
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(next_u64(&mut state) as u32 as i32);
    }
    values
}

fn run_bench(config: Config) {
    let work_items = (config.len as u128) * (config.iters as u128);
    let start = Instant::now();
    match config.bench {
        // A median-ish bound on uniform random input: satisfied within the
        // first few elements on average.
        Bench::MinBoundedEarly => bench_min_bounded(config, 0),
        Bench::MinBoundedWorst => bench_min_bounded(config, i32::MIN),
        Bench::MaxBoundedEarly => bench_max_bounded(config, 0),
        Bench::MaxBoundedWorst => bench_max_bounded(config, i32::MAX),
        Bench::MinFullScan => bench_min_full_scan(config),
        Bench::MaxFullScan => bench_max_full_scan(config),
        Bench::ForEachWhileHalf => bench_for_each_while(config, config.len / 2),
        Bench::ForEachWhileAll => bench_for_each_while(config, usize::MAX),
    }
    let elapsed = start.elapsed();
    if config.report {
        print_report(config, work_items, elapsed);
    }
}

fn print_report(config: Config, work_items: u128, elapsed: std::time::Duration) {
    let elapsed_s = elapsed.as_secs_f64();
    let items_per_s = work_items as f64 / elapsed_s;
    let bytes_per_s = (work_items * 4) as f64 / elapsed_s;
    let ns_per_item = (elapsed_s * 1.0e9) / work_items as f64;

    println!(
        "bench={} len={} iters={}",
        config.bench.name(),
        config.len,
        config.iters
    );
    println!(
        "elapsed_s={:.6} ns_per_item={:.3} throughput={}",
        elapsed_s,
        ns_per_item,
        format_rate(items_per_s, "elem")
    );
    println!(
        "bytes={} byte_throughput={}",
        work_items * 4,
        format_rate(bytes_per_s, "B")
    );
}

fn format_rate(rate: f64, unit: &str) -> String {
    let (value, prefix) = if rate >= 1.0e12 {
        (rate / 1.0e12, "T")
    } else if rate >= 1.0e9 {
        (rate / 1.0e9, "G")
    } else if rate >= 1.0e6 {
        (rate / 1.0e6, "M")
    } else if rate >= 1.0e3 {
        (rate / 1.0e3, "K")
    } else {
        (rate, "")
    };
    format!("{value:.3} {prefix}{unit}/s")
}

fn verify_bench(bench: Bench) {
    let values = [2, 3, 5, 1, 8, 0];
    match bench {
        Bench::MinBoundedEarly | Bench::MinBoundedWorst => {
            assert_eq!(min_element_bounded(&values, &1), Some(3));
            assert_eq!(min_element_bounded(&values, &-42), Some(5));
        }
        Bench::MaxBoundedEarly | Bench::MaxBoundedWorst => {
            assert_eq!(max_element_bounded(&values, &5), Some(2));
            assert_eq!(max_element_bounded(&values, &42), Some(4));
        }
        Bench::MinFullScan => {
            assert_eq!(min_full_scan(&values), Some(5));
        }
        Bench::MaxFullScan => {
            assert_eq!(max_full_scan(&values), Some(4));
        }
        Bench::ForEachWhileHalf | Bench::ForEachWhileAll => {
            let mut count = 0usize;
            for_each_while(values.iter(), |_| {
                count += 1;
                count < 3
            });
            assert_eq!(count, 3);
        }
    }
}

/// Stdlib full-scan baseline with earliest-tie semantics.
fn min_full_scan(values: &[i32]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .min_by_key(|&(_, value)| value)
        .map(|(idx, _)| idx)
}

/// Full-scan maximum: an unreachable bound under a reversed relation
/// degrades the bounded search to an exhaustive one.
fn max_full_scan(values: &[i32]) -> Option<usize> {
    min_element_bounded_by(values, &i32::MAX, |a, b| a > b)
}

fn bench_min_bounded(config: Config, bound: i32) {
    let input = make_i32_input(config.len, config.seed);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        if let Some(idx) = min_element_bounded(black_box(&input), black_box(&bound)) {
            acc ^= idx;
        }
    }
    black_box(acc);
}

fn bench_max_bounded(config: Config, bound: i32) {
    let input = make_i32_input(config.len, config.seed);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        if let Some(idx) = max_element_bounded(black_box(&input), black_box(&bound)) {
            acc ^= idx;
        }
    }
    black_box(acc);
}

fn bench_min_full_scan(config: Config) {
    let input = make_i32_input(config.len, config.seed);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        if let Some(idx) = min_full_scan(black_box(&input)) {
            acc ^= idx;
        }
    }
    black_box(acc);
}

fn bench_max_full_scan(config: Config) {
    let input = make_i32_input(config.len, config.seed);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        if let Some(idx) = max_full_scan(black_box(&input)) {
            acc ^= idx;
        }
    }
    black_box(acc);
}

fn bench_for_each_while(config: Config, stop_after: usize) {
    let input = make_i32_input(config.len, config.seed);
    let mut acc = 0i64;
    for _ in 0..config.iters {
        let mut visited = 0usize;
        for_each_while(black_box(input.as_slice()), |&v| {
            acc = acc.wrapping_add(v as i64);
            visited += 1;
            visited < stop_after
        });
    }
    black_box(acc);
}
