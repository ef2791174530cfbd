//! Generate the demonstration step tables and the concurrent runner.
use super::domain::*;
use super::errors::*;
use super::name_helpers::*;

use std::collections::HashSet;
use std::fmt::Write;

/// Validate the manifest and emit the Rust code included by `src/orchestrator`.
pub(crate) fn run_demonstrations_gen(manifest: &Manifest) -> Result<String, BuildError> {
    validate_manifest(manifest)?;

    let mut buffer = String::new();
    writeln!(buffer, "// @generated by build.rs from the demonstration manifest.")?;
    writeln!(buffer)?;

    for demonstration in &manifest.demonstrations {
        generate_step_table(demonstration, &manifest.countdown, &mut buffer)?;
    }

    generate_demonstration_table(manifest, &mut buffer)?;
    generate_runner(manifest.demonstrations.len(), &mut buffer)?;

    Ok(buffer)
}

/// Reject manifests the orchestrator cannot run.
fn validate_manifest(manifest: &Manifest) -> Result<(), BuildError> {
    if manifest.demonstrations.is_empty() {
        return Err(BuildError::NoDemonstration);
    }
    if manifest.countdown.is_empty() {
        return Err(BuildError::EmptyCountdown);
    }

    let mut seen = HashSet::new();
    for demonstration in &manifest.demonstrations {
        if !is_snake_case(&demonstration.name) {
            return Err(BuildError::InvalidName {
                name: demonstration.name.clone(),
            });
        }
        if !seen.insert(demonstration.name.as_str()) {
            return Err(BuildError::DuplicateName {
                name: demonstration.name.clone(),
            });
        }
    }

    let mut previous_end: Option<u64> = None;
    for demonstration in &manifest.demonstrations {
        if let Some(end) = previous_end {
            if (demonstration.offset_ms as u64) <= end {
                println!(
                    "cargo:warning=Demonstration '{}' starts at {} ms, before the previous one ends ({} ms): output will interleave",
                    demonstration.name, demonstration.offset_ms, end
                );
            }
        }
        let waits = manifest.countdown.len() as u64 * demonstration.step_delay_ms as u64;
        previous_end = Some(demonstration.offset_ms as u64 + waits);
    }

    Ok(())
}

fn step_table_name(demonstration: &DemonstrationDef) -> String {
    format!("{}_STEPS", to_screaming_snake_case(&demonstration.name))
}

/// `pub static <NAME>_STEPS: [Step<'static>; N] = [...];`
fn generate_step_table(
    demonstration: &DemonstrationDef,
    countdown: &[String],
    buffer: &mut String,
) -> Result<(), BuildError> {
    let step_count = countdown.len() + 1;
    writeln!(
        buffer,
        "/// Steps of the `{}` demonstration.",
        demonstration.name
    )?;
    writeln!(
        buffer,
        "pub static {}: [Step<'static>; {}] = [",
        step_table_name(demonstration),
        step_count
    )?;

    for (index, label) in demonstration.labels(countdown).enumerate() {
        // `{:?}` yields an escaped string literal.
        write!(
            buffer,
            "    Step::labelled({:?}).with_delay_ms({})",
            label, demonstration.step_delay_ms
        )?;
        if index + 1 == step_count && demonstration.log_final_step {
            write!(buffer, ".with_on_complete(log_label)")?;
        }
        writeln!(buffer, ",")?;
    }

    writeln!(buffer, "];")?;
    writeln!(buffer)?;
    Ok(())
}

/// `DEMONSTRATION_COUNT` and `DEMONSTRATIONS`.
fn generate_demonstration_table(manifest: &Manifest, buffer: &mut String) -> Result<(), BuildError> {
    let count = manifest.demonstrations.len();
    writeln!(buffer, "/// Number of configured demonstrations.")?;
    writeln!(buffer, "pub const DEMONSTRATION_COUNT: usize = {};", count)?;
    writeln!(buffer)?;
    writeln!(buffer, "/// Configured demonstrations, in start order.")?;
    writeln!(
        buffer,
        "pub static DEMONSTRATIONS: [Demonstration; DEMONSTRATION_COUNT] = ["
    )?;
    for demonstration in &manifest.demonstrations {
        writeln!(buffer, "    Demonstration {{")?;
        writeln!(buffer, "        name: {:?},", demonstration.name)?;
        writeln!(buffer, "        title: {:?},", demonstration.title)?;
        writeln!(buffer, "        offset_ms: {},", demonstration.offset_ms)?;
        writeln!(buffer, "        steps: &{},", step_table_name(demonstration))?;
        writeln!(buffer, "    }},")?;
    }
    writeln!(buffer, "];")?;
    writeln!(buffer)?;
    Ok(())
}

/// `run_demonstrations`: one `run_demonstration` per entry, joined on the caller's task.
fn generate_runner(count: usize, buffer: &mut String) -> Result<(), BuildError> {
    let bindings: Vec<String> = (0..count).map(|i| format!("result_{i}")).collect();
    // A one-element tuple pattern needs its trailing comma.
    let pattern = if count == 1 {
        format!("({},)", bindings[0])
    } else {
        format!("({})", bindings.join(", "))
    };

    writeln!(
        buffer,
        "/// Start every demonstration at once on the shared `display`.\n\
         ///\n\
         /// Each run gets its own [`SharedSink`] handle and its own clone of `timer`;\n\
         /// results are returned in [`DEMONSTRATIONS`] order. A failing run does not\n\
         /// stop the others."
    )?;
    writeln!(buffer, "pub async fn run_demonstrations<M, S, T>(")?;
    writeln!(buffer, "    display: &Mutex<M, S>,")?;
    writeln!(buffer, "    timer: &T,")?;
    writeln!(
        buffer,
        ") -> [Result<SequenceReport, SequenceError<S::Error>>; DEMONSTRATION_COUNT]"
    )?;
    writeln!(buffer, "where")?;
    writeln!(buffer, "    M: RawMutex,")?;
    writeln!(buffer, "    S: DisplaySink,")?;
    writeln!(buffer, "    T: SequenceTimer + Clone,")?;
    writeln!(buffer, "{{")?;
    writeln!(buffer, "    let {} = futures_util::join!(", pattern)?;
    for index in 0..count {
        writeln!(
            buffer,
            "        run_demonstration(SharedSink::new(display), timer.clone(), &DEMONSTRATIONS[{}]),",
            index
        )?;
    }
    writeln!(buffer, "    );")?;
    writeln!(buffer, "    [{}]", bindings.join(", "))?;
    writeln!(buffer, "}}")?;
    Ok(())
}
