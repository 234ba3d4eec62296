/// Row counts collected across one trimming pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimSummary {
    input_rows: usize,
    reversed_rows: usize,
    accepted_rows: usize,
}

impl TrimSummary {
    pub fn new(input_rows: usize, reversed_rows: usize, accepted_rows: usize) -> Self {
        Self {
            input_rows,
            reversed_rows,
            accepted_rows,
        }
    }

    pub fn input_rows(&self) -> usize {
        self.input_rows
    }

    /// Rows that were given in the reverse direction and had to be swapped
    pub fn reversed_rows(&self) -> usize {
        self.reversed_rows
    }

    pub fn accepted_rows(&self) -> usize {
        self.accepted_rows
    }

    pub fn dropped_rows(&self) -> usize {
        self.input_rows - self.accepted_rows
    }

    /// Each accepted row is emitted as a forward/reverse pair
    pub fn output_rows(&self) -> usize {
        self.accepted_rows * 2
    }
}
