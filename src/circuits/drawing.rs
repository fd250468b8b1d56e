// src/circuits/drawing.rs

//! ASCII-art rendering of circuits.
//!
//! Each gate contributes one column: a three-line strip per wire (qubits
//! first, then classical bits). The circuit drawing is the left-to-right
//! concatenation of those columns.

use super::Circuit;
use std::fmt;

/// Top, middle and bottom line of one wire within one gate column.
pub type Drawing = [String; 3];
/// One [`Drawing`] per wire.
pub type Drawings = Vec<Drawing>;

const QUANTUM_WIRE: char = '─';
const CLASSIC_WIRE: char = '═';
const V_WIRE: &str = "│";
const MIN_WIDTH: usize = 5;

/// What a gate places on a single wire.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Idle,
    Boxed(String),
    Control,
    Swap,
    Sink,
}

impl Cell {
    pub(crate) fn boxed(label: impl Into<String>) -> Self {
        Cell::Boxed(label.into())
    }
}

/// A gate column being assembled.
pub(crate) struct Column {
    qubit_count: usize,
    cells: Vec<Cell>,
}

impl Column {
    pub(crate) fn new(qubit_count: usize, bit_count: usize) -> Self {
        Self {
            qubit_count,
            cells: vec![Cell::Idle; qubit_count + bit_count],
        }
    }

    pub(crate) fn put_qubit(&mut self, index: usize, cell: Cell) {
        if index < self.qubit_count {
            self.cells[index] = cell;
        }
    }

    pub(crate) fn put_bit(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(self.qubit_count + index) {
            *slot = cell;
        }
    }

    fn width(&self) -> usize {
        let widest = self
            .cells
            .iter()
            .map(|cell| match cell {
                Cell::Boxed(label) => label.chars().count() + 4,
                _ => 0,
            })
            .max()
            .unwrap_or(0);
        let width = widest.max(MIN_WIDTH);
        // Odd widths keep connectors centered.
        if width % 2 == 0 { width + 1 } else { width }
    }

    /// First and last row touched by the gate.
    fn span(&self) -> Option<(usize, usize)> {
        let mut rows = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell != Cell::Idle)
            .map(|(row, _)| row);
        let first = rows.next()?;
        let last = rows.last().unwrap_or(first);
        Some((first, last))
    }

    pub(crate) fn render(&self) -> Drawings {
        let width = self.width();
        let span = self.span();
        self.cells
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                let wire = if row < self.qubit_count { QUANTUM_WIRE } else { CLASSIC_WIRE };
                let (up, down) = match span {
                    Some((first, last)) => (row > first && row <= last, row >= first && row < last),
                    None => (false, false),
                };
                render_cell(cell, wire, width, up, down)
            })
            .collect()
    }
}

/// Centers `symbol` in a run of `fill` characters of the given width.
fn centered(fill: char, width: usize, symbol: &str) -> String {
    let len = symbol.chars().count();
    if len >= width {
        return symbol.chars().take(width).collect();
    }
    let pre = (width - len) / 2;
    let post = width - len - pre;
    format!("{}{}{}", fill.to_string().repeat(pre), symbol, fill.to_string().repeat(post))
}

fn connector(present: bool) -> &'static str {
    if present { V_WIRE } else { " " }
}

fn render_cell(cell: &Cell, wire: char, width: usize, up: bool, down: bool) -> Drawing {
    let blank = " ".repeat(width);
    match cell {
        Cell::Idle if up && down => {
            let cross = if wire == CLASSIC_WIRE { "╪" } else { "┼" };
            [
                centered(' ', width, V_WIRE),
                centered(wire, width, cross),
                centered(' ', width, V_WIRE),
            ]
        }
        Cell::Idle => [blank.clone(), wire.to_string().repeat(width), blank],
        Cell::Boxed(label) => {
            let inner = width - 2;
            [
                format!("┌{}┐", centered('─', inner, if up { "┴" } else { "─" })),
                format!("┤{}├", centered(' ', inner, label)),
                format!("└{}┘", centered('─', inner, if down { "┬" } else { "─" })),
            ]
        }
        Cell::Control => [
            centered(' ', width, connector(up)),
            centered(wire, width, "■"),
            centered(' ', width, connector(down)),
        ],
        Cell::Swap => [
            centered(' ', width, connector(up)),
            centered(wire, width, "x"),
            centered(' ', width, connector(down)),
        ],
        Cell::Sink => [
            centered(' ', width, connector(up)),
            centered(wire, width, "╩"),
            centered(' ', width, connector(down)),
        ],
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qubit_count = self.qubit_count();
        let bit_count = self.classic_bit_count();
        let wires = qubit_count + bit_count;

        let labels: Vec<String> = (0..qubit_count)
            .map(|i| format!("q{}: ", i))
            .chain((0..bit_count).map(|i| format!("c{}: ", i)))
            .collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let padding = " ".repeat(label_width + 1);

        let columns: Vec<Drawings> = self
            .gates()
            .iter()
            .map(|gate| gate.drawings(qubit_count, bit_count))
            .collect();

        writeln!(
            f,
            "Circuit[{} gates on {} qubits, {} classic bits]",
            self.len(),
            qubit_count,
            bit_count
        )?;
        for row in 0..wires {
            let wire = if row < qubit_count { QUANTUM_WIRE } else { CLASSIC_WIRE };
            for line in 0..3 {
                if line == 1 {
                    write!(f, "{:<width$}{}", labels[row], wire, width = label_width)?;
                } else {
                    write!(f, "{}", padding)?;
                }
                for column in &columns {
                    write!(f, "{}", column[row][line])?;
                }
                if line == 1 {
                    writeln!(f, "{}", wire)?;
                } else {
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
