use serde::Serialize;

/// Label of the appended margin row and column.
pub const TOTAL_LABEL: &str = "Total";

/// A labeled count matrix.
///
/// `cells[row][column]` is `None` where no record fell into the cell. When
/// `has_totals` is set, the last row and the last column are the `Total`
/// margins and the bottom-right cell is the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub cells: Vec<Vec<Option<u64>>>,
    pub has_totals: bool,
}

impl Heatmap {
    pub fn new(
        row_labels: Vec<String>,
        column_labels: Vec<String>,
        cells: Vec<Vec<Option<u64>>>,
    ) -> Self {
        Self {
            row_labels,
            column_labels,
            cells,
            has_totals: false,
        }
    }

    pub fn height(&self) -> usize {
        self.row_labels.len()
    }

    pub fn width(&self) -> usize {
        self.column_labels.len()
    }

    /// True when no body cell exists; `Total` margins alone do not count.
    pub fn is_empty(&self) -> bool {
        let (rows, columns) = self.body_shape();
        rows == 0 || columns == 0
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<u64> {
        self.cells.get(row).and_then(|cells| cells.get(column)).copied().flatten()
    }

    /// Cell by labels, `None` for unknown labels or empty cells.
    pub fn get(&self, row: &str, column: &str) -> Option<u64> {
        let row = self.row_labels.iter().position(|label| label == row)?;
        let column = self.column_labels.iter().position(|label| label == column)?;
        self.cell(row, column)
    }

    /// Sum of the non-margin cells, empty cells counting as zero.
    pub fn body_sum(&self) -> u64 {
        let (rows, columns) = self.body_shape();
        self.cells
            .iter()
            .take(rows)
            .flat_map(|cells| cells.iter().take(columns))
            .map(|cell| cell.unwrap_or(0))
            .sum()
    }

    /// Append a `Total` column of row sums and a `Total` row of column sums.
    ///
    /// Does nothing when the margins are already present. Rows shorter than
    /// the column labels are padded with empty cells first.
    pub fn with_totals(mut self) -> Self {
        if self.has_totals {
            return self;
        }
        let width = self.column_labels.len();
        for cells in &mut self.cells {
            cells.resize(width, None);
            let sum: u64 = cells.iter().map(|cell| cell.unwrap_or(0)).sum();
            cells.push(Some(sum));
        }
        let totals: Vec<Option<u64>> = (0..=width)
            .map(|column| {
                Some(
                    self.cells
                        .iter()
                        .map(|cells| cells.get(column).copied().flatten().unwrap_or(0))
                        .sum::<u64>(),
                )
            })
            .collect();
        self.cells.push(totals);
        self.column_labels.push(TOTAL_LABEL.to_string());
        self.row_labels.push(TOTAL_LABEL.to_string());
        self.has_totals = true;
        self
    }

    pub fn map_row_labels(mut self, f: impl Fn(&str) -> String) -> Self {
        let (rows, _) = self.body_shape();
        for label in self.row_labels.iter_mut().take(rows) {
            *label = f(label);
        }
        self
    }

    pub fn map_column_labels(mut self, f: impl Fn(&str) -> String) -> Self {
        let (_, columns) = self.body_shape();
        for label in self.column_labels.iter_mut().take(columns) {
            *label = f(label);
        }
        self
    }

    fn body_shape(&self) -> (usize, usize) {
        let margin = usize::from(self.has_totals);
        (
            self.height().saturating_sub(margin),
            self.width().saturating_sub(margin),
        )
    }
}
