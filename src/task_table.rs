use comfy_table::Attribute;
use comfy_table::Cell;
use comfy_table::Color;
use comfy_table::Table;

use crate::task_record::TaskRecord;

fn status_cell(record: &TaskRecord) -> Cell {
    if record.wip == 1 {
        return Cell::new("wip").add_attribute(Attribute::Dim);
    }
    let status = record.status.to_lowercase();
    let color = match status.as_str() {
        "new" => Color::Green,
        "merged" => Color::Magenta,
        "abandoned" => Color::Red,
        _ => Color::Reset,
    };
    Cell::new(status).fg(color)
}

/// A table of tasks, one row per change.
pub fn task_table(records: &[TaskRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::NOTHING)
        .set_header(["Change", "Project", "Branch", "Status", "Summary"]);

    for record in records {
        table.add_row([
            Cell::new(record.id).add_attribute(Attribute::Bold),
            Cell::new(&record.project),
            Cell::new(&record.branch),
            status_cell(record),
            Cell::new(&record.summary),
        ]);
    }

    table
}
