use truthtab_expr::{Calculator, EvalError};

pub fn render_table(calculator: &Calculator, verbose: bool) -> Result<String, EvalError> {
    let (indices, labels) = calculator.describe(verbose);
    let rows = calculator.evaluate_all(verbose)?;
    let split = calculator.variable_count();

    let widths = indices
        .iter()
        .zip(&labels)
        .map(|(index, label)| index.to_string().len().max(label.chars().count()))
        .collect::<Vec<_>>();
    let index_cells = indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    let border = border_line(&widths, split);
    let mut lines = vec![
        border.clone(),
        header_line(&index_cells, &widths, split),
        header_line(&labels, &widths, split),
        border.clone(),
    ];
    for row in &rows {
        lines.push(value_line(&row.assignment, &row.results, &widths, split));
    }
    lines.push(border);

    Ok(lines.join("\n"))
}

fn border_line(widths: &[usize], split: usize) -> String {
    format!(
        "+-{}-+ +-{}-+",
        dashes(&widths[..split]),
        dashes(&widths[split..])
    )
}

fn dashes(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-")
}

fn header_line(cells: &[String], widths: &[usize], split: usize) -> String {
    let mut line = String::from("|");
    for (column, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if column == split {
            line.push_str(" |");
        }
        let width = *width;
        line.push_str(&format!(" {cell:<width$} |"));
    }
    line
}

fn value_line(assignment: &[bool], results: &[bool], widths: &[usize], split: usize) -> String {
    let mut line = String::from("|");
    for (value, width) in assignment.iter().zip(&widths[..split]) {
        push_value_cell(&mut line, *value, *width);
    }
    line.push_str(" |");
    for (value, width) in results.iter().zip(&widths[split..]) {
        push_value_cell(&mut line, *value, *width);
    }
    line
}

fn push_value_cell(line: &mut String, value: bool, width: usize) {
    let digit = u8::from(value);
    line.push_str(&format!(" {digit:^width$} |"));
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
