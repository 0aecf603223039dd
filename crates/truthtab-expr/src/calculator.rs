use crate::ast::Expr;
use crate::parser::{parse_expression, ParseError, ParsedExpr};

// Assignments are enumerated through a u64 mask, one bit per variable.
pub const MAX_VARIABLES: usize = 63;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("variable id {id} out of range for {count} variables")]
    VariableOutOfRange { id: usize, count: usize },
    #[error("{count} variables exceed the 63-variable enumeration limit")]
    TooManyVariables { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub assignment: Vec<bool>,
    pub results: Vec<bool>,
}

pub struct Calculator {
    root: Expr,
    variables: Vec<String>,
}

impl Calculator {
    pub fn new(parsed: ParsedExpr) -> Self {
        Self {
            root: parsed.root,
            variables: parsed.variables,
        }
    }

    pub fn from_input(input: &str) -> Result<Self, ParseError> {
        Ok(Self::new(parse_expression(input)?))
    }

    pub fn root(&self) -> &Expr {
        &self.root
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn describe(&self, verbose: bool) -> (Vec<usize>, Vec<String>) {
        let mut labels = self.variables.clone();
        if verbose {
            let leaves_only = labels.len();
            label_node(&self.root, &mut labels);
            if labels.len() == leaves_only {
                // A bare variable has no internal nodes; duplicate the name so
                // a result column always exists.
                labels.extend_from_slice(&self.variables);
            }
        } else {
            labels.push("[result]".to_string());
        }
        let indices = (1..=labels.len()).collect();
        (indices, labels)
    }

    pub fn evaluate(&self, assignment: &[bool]) -> Result<bool, EvalError> {
        evaluate_node(&self.root, assignment, None)
    }

    pub fn evaluate_row(&self, assignment: &[bool], verbose: bool) -> Result<Vec<bool>, EvalError> {
        let mut results = Vec::new();
        let sink = if verbose { Some(&mut results) } else { None };
        let root_value = evaluate_node(&self.root, assignment, sink)?;
        if results.is_empty() {
            results.push(root_value);
        }
        Ok(results)
    }

    pub fn evaluate_all(&self, verbose: bool) -> Result<Vec<Row>, EvalError> {
        let count = self.variables.len();
        if count > MAX_VARIABLES {
            return Err(EvalError::TooManyVariables { count });
        }

        let mut rows = Vec::new();
        for mask in 0..(1u64 << count) {
            let assignment: Vec<bool> = (0..count).map(|id| (mask >> id) & 1 == 1).collect();
            let results = self.evaluate_row(&assignment, verbose)?;
            rows.push(Row {
                assignment,
                results,
            });
        }
        Ok(rows)
    }
}

fn label_node(node: &Expr, labels: &mut Vec<String>) -> String {
    match node {
        Expr::Variable { name, .. } => name.clone(),
        Expr::Unary { op, expr } => {
            let operand = label_node(expr, labels);
            labels.push(format!("{} {}", op.symbol(), operand));
            format!("[{}]", labels.len())
        }
        Expr::Binary { left, op, right } => {
            let left_ref = label_node(left, labels);
            let right_ref = label_node(right, labels);
            labels.push(format!("{} {} {}", left_ref, op.symbol(), right_ref));
            format!("[{}]", labels.len())
        }
    }
}

// Sub-results are appended children-first, left subtree before right, so they
// line up index-for-index with the labels from `label_node`.
fn evaluate_node(
    node: &Expr,
    assignment: &[bool],
    mut sink: Option<&mut Vec<bool>>,
) -> Result<bool, EvalError> {
    match node {
        Expr::Variable { id, .. } => {
            assignment
                .get(*id)
                .copied()
                .ok_or(EvalError::VariableOutOfRange {
                    id: *id,
                    count: assignment.len(),
                })
        }
        Expr::Unary { op, expr } => {
            let value = evaluate_node(expr, assignment, sink.as_deref_mut())?;
            let out = op.apply(value);
            if let Some(results) = sink {
                results.push(out);
            }
            Ok(out)
        }
        Expr::Binary { left, op, right } => {
            let left_value = evaluate_node(left, assignment, sink.as_deref_mut())?;
            let right_value = evaluate_node(right, assignment, sink.as_deref_mut())?;
            let out = op.apply(right_value, left_value);
            if let Some(results) = sink {
                results.push(out);
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
#[path = "calculator_test.rs"]
mod tests;
