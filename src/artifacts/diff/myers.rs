//! Myers' diff algorithm
//!
//! Computes the shortest edit script turning one sequence into another, then
//! groups the script into unified-diff hunks.

use derive_new::new;
use std::fmt::Display;

/// Lines of unchanged context kept around each change
pub const HUNK_CONTEXT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }
}

impl<T> Edit<T>
where
    T: Clone + Into<String>,
{
    pub fn as_string(&self) -> String {
        match self {
            Edit::Delete { value } => format!("-{}", value.clone().into()),
            Edit::Insert { value } => format!("+{}", value.clone().into()),
            Edit::Equal { value } => format!(" {}", value.clone().into()),
        }
    }
}

impl<T> Display for Edit<T>
where
    T: Clone + Into<String>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditPath;
    type EditScript;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Self::EditScript;
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type Trace = Vec<Vec<isize>>;
    type EditPath = Vec<(isize, isize, isize, isize)>;
    type EditScript = Vec<Edit<T>>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        // one spare slot on each side keeps v[idx - 1] and v[idx + 1] in bounds
        let mut v = vec![0; 2 * offset + 3];
        let offset = offset + 1;

        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                    // we came from k+1, thus an insertion
                    v[idx + 1]
                } else {
                    // we came from k-1, thus a deletion
                    v[idx - 1] + 1
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Self::EditPath {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (x + y + 1) as isize;
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit();

        for (d, v) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let prev_k = if k == -d
                || (k != d && v[(offset + k - 1) as usize] < v[(offset + k + 1) as usize])
            {
                k + 1
            } else {
                k - 1
            };

            let prev_x = v[(offset + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }

    fn diff(&self) -> Self::EditScript {
        let mut diff = Vec::new();

        for (prev_x, prev_y, x, y) in self.backtrack() {
            if x == prev_x {
                // Insert: only y increased
                diff.push(Edit::Insert {
                    value: self.b[prev_y as usize].clone(),
                });
            } else if y == prev_y {
                // Delete: only x increased
                diff.push(Edit::Delete {
                    value: self.a[prev_x as usize].clone(),
                });
            } else {
                // Equal: both increased (diagonal move)
                diff.push(Edit::Equal {
                    value: self.a[prev_x as usize].clone(),
                });
            }
        }

        diff.reverse();
        diff
    }
}

/// A run of edits with its surrounding context, as printed under one `@@` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    a_start: usize,
    b_start: usize,
    edits: Vec<Edit<T>>,
}

impl<T: Clone> Hunk<T> {
    /// Group an edit script into hunks keeping `context` equal lines around changes
    ///
    /// Changes separated by at most `2 * context` equal lines share a hunk.
    pub fn build(edits: &[Edit<T>], context: usize) -> Vec<Hunk<T>> {
        // lines of a and b consumed before each edit
        let mut positions = Vec::with_capacity(edits.len());
        let (mut a_line, mut b_line) = (0, 0);
        for edit in edits {
            positions.push((a_line, b_line));
            match edit {
                Edit::Delete { .. } => a_line += 1,
                Edit::Insert { .. } => b_line += 1,
                Edit::Equal { .. } => {
                    a_line += 1;
                    b_line += 1;
                }
            }
        }

        let next_change = |from: usize| (from..edits.len()).find(|&i| !edits[i].is_equal());

        let mut hunks = Vec::new();
        let mut cursor = 0;

        while let Some(first) = next_change(cursor) {
            let start = first.saturating_sub(context);
            let mut last = first;

            while let Some(next) = next_change(last + 1) {
                if next - last - 1 > 2 * context {
                    break;
                }
                last = next;
            }

            let end = (last + context + 1).min(edits.len());
            let (a_start, b_start) = positions[start];
            hunks.push(Hunk {
                a_start,
                b_start,
                edits: edits[start..end].to_vec(),
            });

            cursor = end;
        }

        hunks
    }
}

impl<T> Hunk<T> {
    pub fn a_size(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Insert { .. }))
            .count()
    }

    pub fn b_size(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Delete { .. }))
            .count()
    }

    /// 1-based first line of the old side (the line before it when the side is empty)
    pub fn a_start(&self) -> usize {
        if self.a_size() == 0 {
            self.a_start
        } else {
            self.a_start + 1
        }
    }

    pub fn b_start(&self) -> usize {
        if self.b_size() == 0 {
            self.b_start
        } else {
            self.b_start + 1
        }
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    /// `@@ -a,b +c,d @@` header, omitting a range length of one
    pub fn header(&self) -> String {
        let range = |start: usize, size: usize| {
            if size == 1 {
                format!("{start}")
            } else {
                format!("{start},{size}")
            }
        };

        format!(
            "@@ -{} +{} @@",
            range(self.a_start(), self.a_size()),
            range(self.b_start(), self.b_size())
        )
    }
}
