use cogforge::geometry::{Position, BOARD_COLS, BOARD_ROWS};
use cogforge::inventory::{Inventory, SlotState};
use cogforge::planner::Move;
use cogforge::scorer::ScoreBreakdown;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

const LABEL_WIDTH: usize = 6;

fn board_cell(inventory: &Inventory, key: u32) -> Cell {
    let cell = match inventory.slot_state(key) {
        SlotState::Flag => Cell::new("F").fg(Color::Yellow),
        SlotState::Blocked => Cell::new("##").fg(Color::DarkGrey),
        SlotState::Open => match inventory.get(key) {
            Some(item) => {
                let label: String = item.icon.chars().take(LABEL_WIDTH).collect();
                let cell = Cell::new(label);
                if item.fixed {
                    cell.add_attribute(Attribute::Bold).fg(Color::Cyan)
                } else if item.is_player {
                    cell.fg(Color::Green)
                } else {
                    cell
                }
            }
            None => Cell::new("."),
        },
    };
    cell.set_alignment(CellAlignment::Center)
}

pub fn print_board(title: &str, inventory: &Inventory) {
    println!("\n{}", title);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in 0..BOARD_ROWS {
        let cells: Vec<Cell> = (0..BOARD_COLS)
            .map(|col| board_cell(inventory, (row * BOARD_COLS + col) as u32))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_score(breakdown: &ScoreBreakdown) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Build").add_attribute(Attribute::Bold),
        Cell::new("Exp").add_attribute(Attribute::Bold),
        Cell::new("Flaggy").add_attribute(Attribute::Bold),
        Cell::new("Flag Boost"),
        Cell::new("Total").fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new(format!("{:.0}", breakdown.build_rate)),
        Cell::new(format!("{:.2}", breakdown.exp_bonus)),
        Cell::new(format!("{:.0}", breakdown.flaggy_rate)),
        Cell::new(format!("{:.2}", breakdown.flag_boost)),
        Cell::new(format!("{:.2}", breakdown.total)).fg(Color::Cyan),
    ]);
    println!("\n{}", table);
}

pub fn print_score_comparison(before: &ScoreBreakdown, after: &ScoreBreakdown) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["Metric", "Before", "After", "Delta"]);
    let rows = [
        ("Build Rate", before.build_rate, after.build_rate),
        ("Exp Bonus", before.exp_bonus, after.exp_bonus),
        ("Flaggy Rate", before.flaggy_rate, after.flaggy_rate),
        ("Flag Boost", before.flag_boost, after.flag_boost),
        ("Total", before.total, after.total),
    ];
    for (name, b, a) in rows {
        let delta = a - b;
        let color = if delta > 0.0 {
            Color::Green
        } else if delta < 0.0 {
            Color::Red
        } else {
            Color::Reset
        };
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", b)),
            Cell::new(format!("{:.2}", a)),
            Cell::new(format!("{:+.2}", delta)).fg(color),
        ]);
    }

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("\n{}", table);
}

pub fn print_moves(moves: &[Move]) {
    if moves.is_empty() {
        println!("\nNo moves needed.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["#", "From", "To", "From (x, y)", "To (x, y)"]);

    for (i, m) in moves.iter().enumerate() {
        let from = Position::from_key(m.from);
        let to = Position::from_key(m.to);
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(m.from),
            Cell::new(m.to),
            Cell::new(format!("({}, {})", from.x, from.y)),
            Cell::new(format!("({}, {})", to.x, to.y)),
        ]);
    }
    println!("\nMoves ({}):\n{}", moves.len(), table);
}
