//! Reading and writing of the CNET format used by the solver.
//!
//! A CNET file declares the number of variables (`.v <n>`) and then, for every variable,
//! its inputs and the on-set of its update function:
//!
//! ```text
//! .v 2
//! # 1 = a
//! # 2 = b
//!
//! .n 1 1 2
//! 1 1
//!
//! .n 2 2 1 2
//! 01 1
//! 10 1
//! ```
//!
//! Variables are numbered from `1` in the order of the network. Every row of the on-set
//! lists one valuation of the inputs (in the declared order) for which the variable
//! updates to `1`. A constant `true` function is a single row `1` with no inputs. An
//! input variable without an update function depends only on itself (`.n k 1 k` / `1 1`).
//!
//! Variable names are not part of the format. They are written into `# <id> = <name>`
//! comments, which can be read back with [`read_cnet_labels`].

use crate::error::BnsError;
use biodivine_lib_param_bn::{BooleanNetwork, VariableId};
use log::{debug, trace};
use std::collections::HashMap;
use std::io::{BufWriter, Write};
use std::path::Path;

/// The largest number of inputs of a single update function that will be expanded into
/// a truth table.
pub const MAX_FUNCTION_INPUTS: usize = 24;

/// The on-set of one update function.
struct TruthTable {
    inputs: Vec<VariableId>,
    on_set: Vec<String>,
}

/// Write `network` as a CNET model into `output`.
///
/// Input variables (no regulators, no update function) are exported as identity functions,
/// so they keep their initial value. Fails with [`BnsError::ModelExport`] if a regulated
/// variable has no update function, if an update function uses uninterpreted parameters, or if a function has more than
/// [`MAX_FUNCTION_INPUTS`] inputs. Nothing is written in such case.
pub fn write_cnet<W: Write>(network: &BooleanNetwork, output: W) -> Result<(), BnsError> {
    let tables = network
        .variables()
        .map(|var| truth_table(network, var))
        .collect::<Result<Vec<_>, _>>()?;

    let mut output = BufWriter::new(output);
    writeln!(output, ".v {}", network.num_vars())?;
    for var in network.variables() {
        writeln!(
            output,
            "# {} = {}",
            cnet_id(var),
            network.get_variable_name(var)
        )?;
    }

    for (var, table) in network.variables().zip(tables) {
        writeln!(output)?;
        write!(output, ".n {} {}", cnet_id(var), table.inputs.len())?;
        for input in &table.inputs {
            write!(output, " {}", cnet_id(*input))?;
        }
        writeln!(output)?;
        for row in &table.on_set {
            if row.is_empty() {
                writeln!(output, "1")?;
            } else {
                writeln!(output, "{row} 1")?;
            }
        }
    }

    output.flush()?;
    Ok(())
}

/// Write `network` as a CNET model into a string.
pub fn to_cnet_string(network: &BooleanNetwork) -> Result<String, BnsError> {
    let mut buffer = Vec::new();
    write_cnet(network, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| BnsError::ModelExport(e.to_string()))
}

/// Read variable names from the `# <id> = <name>` comments of a CNET file.
///
/// Returns `None` unless the file declares its variable count and every variable has
/// a label. If a variable is labelled more than once, the first label is used.
pub fn read_cnet_labels(path: &Path) -> Result<Option<Vec<String>>, BnsError> {
    if !path.is_file() {
        return Err(BnsError::ModelNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_cnet_labels(&content))
}

/// Same as [`read_cnet_labels`], but using the file content directly.
pub fn parse_cnet_labels(content: &str) -> Option<Vec<String>> {
    let mut variable_count = None;
    let mut labels: HashMap<usize, String> = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if let Some(count) = line.strip_prefix(".v") {
            variable_count = count.trim().parse::<usize>().ok();
        } else if let Some(comment) = line.strip_prefix('#') {
            let Some((id, name)) = comment.split_once('=') else {
                continue;
            };
            let (Ok(id), name) = (id.trim().parse::<usize>(), name.trim()) else {
                continue;
            };
            if !name.is_empty() && !labels.contains_key(&id) {
                trace!("Found label `{name}` of variable {id}.");
                labels.insert(id, name.to_string());
            }
        }
    }

    let variable_count = variable_count?;
    let names = (1..=variable_count)
        .map(|id| labels.remove(&id))
        .collect::<Option<Vec<_>>>();
    if names.is_none() {
        debug!("CNET comments do not label all {variable_count} variables.");
    }
    names
}

fn cnet_id(var: VariableId) -> usize {
    var.to_index() + 1
}

fn truth_table(network: &BooleanNetwork, var: VariableId) -> Result<TruthTable, BnsError> {
    let name = network.get_variable_name(var);
    let Some(function) = network.get_update_function(var) else {
        if network.regulators(var).is_empty() {
            // Unregulated input without a function keeps its value.
            trace!("Input variable `{name}` is exported as an identity function.");
            return Ok(TruthTable {
                inputs: vec![var],
                on_set: vec!["1".to_string()],
            });
        }
        return Err(BnsError::ModelExport(format!(
            "Variable `{name}` has regulators but no update function."
        )));
    };

    let inputs = function.collect_arguments();
    if inputs.len() > MAX_FUNCTION_INPUTS {
        return Err(BnsError::ModelExport(format!(
            "Update function of `{name}` has {} inputs (at most {MAX_FUNCTION_INPUTS} supported).",
            inputs.len()
        )));
    }

    let width = inputs.len();
    let mut on_set = Vec::new();
    let mut valuation = HashMap::with_capacity(width);
    for row in 0..(1usize << width) {
        let mut bits = String::with_capacity(width);
        for (i, input) in inputs.iter().enumerate() {
            // The first input is the most significant bit of `row`.
            let value = (row >> (width - 1 - i)) & 1 == 1;
            valuation.insert(*input, value);
            bits.push(if value { '1' } else { '0' });
        }
        match function.evaluate(&valuation) {
            Some(true) => on_set.push(bits),
            Some(false) => (),
            None => {
                return Err(BnsError::ModelExport(format!(
                    "Update function of `{name}` uses uninterpreted parameters."
                )));
            }
        }
    }

    trace!(
        "Variable `{name}` has {} inputs and {} rows in its on-set.",
        width,
        on_set.len()
    );
    Ok(TruthTable { inputs, on_set })
}
