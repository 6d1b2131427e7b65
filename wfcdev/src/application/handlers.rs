use std::path::PathBuf;
use std::time::Instant;

use tracing::info;
use wfc_core::error::{Result, WfcError};
use wfc_core::{
    CountOptions, CountOutcome, EmptyTokens, OverwritePolicy, SplitOptions, SplitOutcome,
    count_words, generate_test_data, split,
};

use crate::presentation::cli::SplitArgs;

fn overwrite_policy(no_clobber: bool) -> OverwritePolicy {
    if no_clobber {
        OverwritePolicy::Refuse
    } else {
        OverwritePolicy::Overwrite
    }
}

fn empty_tokens(keep_empty: bool) -> EmptyTokens {
    if keep_empty {
        EmptyTokens::Keep
    } else {
        EmptyTokens::Skip
    }
}

fn split_options(args: &SplitArgs, no_clobber: bool) -> Result<SplitOptions> {
    let buffer_size = usize::try_from(args.buffer_size).map_err(|_| WfcError::InvalidBufferSize)?;
    Ok(SplitOptions {
        buffer_size,
        overwrite: overwrite_policy(no_clobber),
        ..Default::default()
    })
}

fn print_split(out: &SplitOutcome) {
    for c in &out.chunks {
        println!(
            "#{:<5} off={:<12} len={:<12} {}",
            c.spec.index,
            c.spec.offset,
            c.spec.len,
            c.path.display()
        );
    }
}

fn print_count(out: &CountOutcome) {
    for err in &out.tally.skipped {
        eprintln!("skipped: {err}");
    }
    println!(
        "{}  ({} words, {} files)",
        out.report_path.display(),
        out.report_lines,
        out.tally.files_read
    );
}

pub fn handle_split(source: PathBuf, args: SplitArgs, no_clobber: bool) -> Result<()> {
    let opts = split_options(&args, no_clobber)?;
    let out = split(&source, args.chunk_size, &opts)?;
    print_split(&out);
    Ok(())
}

pub fn handle_count(dir: PathBuf, keep_empty: bool, no_clobber: bool) -> Result<()> {
    let opts = CountOptions {
        empty_tokens: empty_tokens(keep_empty),
        overwrite: overwrite_policy(no_clobber),
        ..Default::default()
    };
    let out = count_words(&dir, &opts)?;
    print_count(&out);
    Ok(())
}

pub fn handle_run(
    source: PathBuf,
    args: SplitArgs,
    keep_empty: bool,
    no_clobber: bool,
) -> Result<()> {
    let opts = split_options(&args, no_clobber)?;

    let t = Instant::now();
    let split_out = split(&source, args.chunk_size, &opts)?;
    info!(elapsed_ms = t.elapsed().as_millis() as u64, "split phase done");
    print_split(&split_out);

    let t = Instant::now();
    let count_out = count_words(
        &split_out.out_dir,
        &CountOptions {
            empty_tokens: empty_tokens(keep_empty),
            overwrite: overwrite_policy(no_clobber),
            ..Default::default()
        },
    )?;
    info!(elapsed_ms = t.elapsed().as_millis() as u64, "count phase done");
    print_count(&count_out);
    Ok(())
}

pub fn handle_generate(source: PathBuf, copies: u32) -> Result<()> {
    let out = generate_test_data(&source, copies)?;
    println!("{}", out.display());
    Ok(())
}
