/*!
Reading the output of a solver.

The layout of output is fixed by line:

| Line | Form                       |
|------|----------------------------|
| 0    | a comment                  |
| 1    | `o <objective>`            |
| 2    | `s <status>`               |
| 3    | `v <literal> … [0]`        |

Literals may be prefixed by a letter, e.g. `x12` or `-x3`, and the terminating `0` is optional.

```rust
# use mrsort_sat::solver::{output::parse_output, SolverOutcome};
let stdout = "c solved\no 1\ns OPTIMUM FOUND\nv x1 -x2 x3 0\n";

match parse_output(stdout, 3) {
    Ok(SolverOutcome::Optimum { objective, literals }) => {
        assert_eq!(objective, 1);
        assert_eq!(literals, vec![1, -2, 3]);
    }
    _ => panic!("expected an optimum"),
}
```
*/

use crate::{
    misc::log::targets::{self},
    solver::{SolverOutcome, OPTIMUM_FOUND},
    structures::{
        atom::Atom,
        clause::Weight,
        literal::{IntLiteral, Literal},
    },
    types::err::ProtocolError,
};

/// Reads the output of a solver over an instance of `variable_count` variables.
pub fn parse_output(stdout: &str, variable_count: usize) -> Result<SolverOutcome, ProtocolError> {
    let lines = stdout.lines().collect::<Vec<_>>();
    if lines.len() < 3 {
        return Err(ProtocolError::Truncated { lines: lines.len() });
    }

    let status = parse_status(lines[2])?;
    if status != OPTIMUM_FOUND {
        log::info!(target: targets::DECODING, "No optimum, status: {status}");
        return Ok(SolverOutcome::NoOptimum { status });
    }

    let objective = parse_objective(lines[1])?;
    let Some(model) = lines.get(3) else {
        return Err(ProtocolError::MissingModel);
    };
    let literals = parse_model(model, variable_count)?;

    log::info!(target: targets::DECODING, "Optimum of {objective} over {} literals", literals.len());
    Ok(SolverOutcome::Optimum {
        objective,
        literals,
    })
}

fn parse_status(line: &str) -> Result<String, ProtocolError> {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some("s") => {
            let status = tokens.collect::<Vec<_>>().join(" ");
            match status.is_empty() {
                true => Err(ProtocolError::StatusLine(line.to_string())),
                false => Ok(status),
            }
        }
        _ => Err(ProtocolError::StatusLine(line.to_string())),
    }
}

fn parse_objective(line: &str) -> Result<Weight, ProtocolError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    match tokens.as_slice() {
        ["o", objective] => objective
            .parse::<Weight>()
            .map_err(|_| ProtocolError::ObjectiveLine(line.to_string())),
        _ => Err(ProtocolError::ObjectiveLine(line.to_string())),
    }
}

fn parse_model(line: &str, variable_count: usize) -> Result<Vec<IntLiteral>, ProtocolError> {
    let mut tokens = line.split_whitespace().peekable();
    if tokens.next() != Some("v") {
        return Err(ProtocolError::ModelLine(line.to_string()));
    }

    let mut valued = vec![false; variable_count + 1];
    let mut literals = Vec::with_capacity(variable_count);

    while let Some(token) = tokens.next() {
        if token == "0" && tokens.peek().is_none() {
            break;
        }

        let (variable, polarity) = parse_literal(token)?;
        if variable == 0 || variable > variable_count as u64 {
            return Err(ProtocolError::UnknownVariable(variable));
        }

        let atom = variable as Atom;
        if valued[atom as usize] {
            return Err(ProtocolError::RepeatedVariable(atom));
        }
        valued[atom as usize] = true;
        literals.push(IntLiteral::new(atom, polarity));
    }

    if literals.len() != variable_count {
        return Err(ProtocolError::IncompleteModel {
            expected: variable_count,
            found: literals.len(),
        });
    }
    Ok(literals)
}

// A token of the form [-][letter]digits.
fn parse_literal(token: &str) -> Result<(u64, bool), ProtocolError> {
    let (polarity, rest) = match token.strip_prefix('-') {
        Some(rest) => (false, rest),
        None => (true, token),
    };
    let digits = rest
        .strip_prefix(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(rest);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProtocolError::Literal(token.to_string()));
    }
    digits
        .parse::<u64>()
        .map(|variable| (variable, polarity))
        .map_err(|_| ProtocolError::Literal(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimum() {
        let stdout = "c comment\no 0\ns OPTIMUM FOUND\nv 1 -2 3 -4\n";
        assert_eq!(
            parse_output(stdout, 4),
            Ok(SolverOutcome::Optimum {
                objective: 0,
                literals: vec![1, -2, 3, -4]
            })
        );
    }

    #[test]
    fn prefixed_literals() {
        let stdout = "c\no 12\ns OPTIMUM FOUND\nv -x1 x2 0";
        assert_eq!(
            parse_output(stdout, 2),
            Ok(SolverOutcome::Optimum {
                objective: 12,
                literals: vec![-1, 2]
            })
        );
    }

    #[test]
    fn no_optimum() {
        let stdout = "c comment\no -\ns UNSATISFIABLE\n";
        assert_eq!(
            parse_output(stdout, 4),
            Ok(SolverOutcome::NoOptimum {
                status: "UNSATISFIABLE".to_string()
            })
        );
    }

    #[test]
    fn missing_status() {
        let stdout = "c comment\no 0\nv 1 2 0\n";
        assert!(matches!(
            parse_output(stdout, 2),
            Err(ProtocolError::StatusLine(_))
        ));

        assert_eq!(
            parse_output("c comment\no 0\n", 2),
            Err(ProtocolError::Truncated { lines: 2 })
        );
    }

    #[test]
    fn malformed_optimum() {
        assert!(matches!(
            parse_output("c\no many\ns OPTIMUM FOUND\nv 1 0", 1),
            Err(ProtocolError::ObjectiveLine(_))
        ));
        assert_eq!(
            parse_output("c\no 0\ns OPTIMUM FOUND", 1),
            Err(ProtocolError::MissingModel)
        );
        assert!(matches!(
            parse_output("c\no 0\ns OPTIMUM FOUND\n1 0", 1),
            Err(ProtocolError::ModelLine(_))
        ));
        assert!(matches!(
            parse_output("c\no 0\ns OPTIMUM FOUND\nv 1 y 0", 2),
            Err(ProtocolError::Literal(_))
        ));
    }

    #[test]
    fn model_coverage() {
        assert_eq!(
            parse_output("c\no 0\ns OPTIMUM FOUND\nv 1 -3 0", 2),
            Err(ProtocolError::UnknownVariable(3))
        );
        assert_eq!(
            parse_output("c\no 0\ns OPTIMUM FOUND\nv 1 -1 0", 2),
            Err(ProtocolError::RepeatedVariable(1))
        );
        assert_eq!(
            parse_output("c\no 0\ns OPTIMUM FOUND\nv 1 0", 2),
            Err(ProtocolError::IncompleteModel {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            parse_output("c\no 0\ns OPTIMUM FOUND\nv 1 0 2", 2),
            Err(ProtocolError::UnknownVariable(0))
        );
    }
}
