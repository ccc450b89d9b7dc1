// Snapshot and trace types recorded by the sort engine

use std::fmt;

/// One position of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub value: u8,
    pub settled: bool,
}

/// State of the working array after one outer pass
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    cells: Vec<Cell>,
}

impl Snapshot {
    /// Capture `values`, marking every position `<= settled_through` as settled.
    /// `None` leaves every position unsettled.
    pub(crate) fn capture(values: &[u8], settled_through: Option<usize>) -> Self {
        let cells = values
            .iter()
            .enumerate()
            .map(|(p, &value)| Cell {
                value,
                settled: settled_through.is_some_and(|i| p <= i),
            })
            .collect();
        Snapshot { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Values without their annotations
    pub fn values(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.value).collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn settled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.settled).count()
    }

    /// Whether `position` is settled; out-of-range positions are not
    pub fn is_settled(&self, position: usize) -> bool {
        self.cells.get(position).is_some_and(|c| c.settled)
    }

    /// Render with the settled prefix in brackets, e.g. `[3 8 9] 2 4`
    pub fn annotated(&self) -> String {
        let settled: Vec<String> = self
            .cells
            .iter()
            .filter(|c| c.settled)
            .map(|c| c.value.to_string())
            .collect();
        let rest: Vec<String> = self
            .cells
            .iter()
            .filter(|c| !c.settled)
            .map(|c| c.value.to_string())
            .collect();

        match (settled.is_empty(), rest.is_empty()) {
            (true, _) => rest.join(" "),
            (false, true) => format!("[{}]", settled.join(" ")),
            (false, false) => format!("[{}] {}", settled.join(" "), rest.join(" ")),
        }
    }
}

/// Plain form: values joined by single spaces
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", cell.value)?;
        }
        Ok(())
    }
}

/// Ordered snapshots produced by one sort invocation
///
/// Snapshots are only appended by the recorder; callers get read access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    snapshots: Vec<Snapshot>,
}

impl Trace {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Trace {
            snapshots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// One joined string per snapshot, settled flags discarded
    pub fn plain_steps(&self) -> Vec<String> {
        self.snapshots.iter().map(|s| s.to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
