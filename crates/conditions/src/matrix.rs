use log::debug;

/// Row-major matrix.
pub type Matrix = Vec<Vec<i64>>;

/// Number of columns, or `None` for ragged rows.
fn column_count(matrix: &[Vec<i64>]) -> Option<usize> {
    let width = matrix.first().map_or(0, Vec::len);
    matrix.iter().all(|row| row.len() == width).then_some(width)
}

/// Dot product of `row` with column `column` of `matrix`, or `None` on overflow.
fn dot(row: &[i64], matrix: &[Vec<i64>], column: usize) -> Option<i64> {
    row.iter().zip(matrix).try_fold(0_i64, |sum, (value, other_row)| {
        let other = other_row.get(column).copied().unwrap_or(0);
        sum.checked_add(value.checked_mul(other)?)
    })
}

/// Product `m1 × m2`. `None` if either matrix is ragged, the inner dimensions differ,
/// or an entry overflows `i64`.
pub fn get_matrix_product(m1: &[Vec<i64>], m2: &[Vec<i64>]) -> Option<Matrix> {
    let inner = column_count(m1)?;
    let columns = column_count(m2)?;
    if inner != m2.len() {
        debug!(
            "cannot multiply {}x{inner} by {}x{columns}",
            m1.len(),
            m2.len()
        );
        return None;
    }
    m1.iter()
        .map(|row| {
            (0..columns)
                .map(|column| dot(row, m2, column))
                .collect::<Option<Vec<i64>>>()
        })
        .collect()
}
