//! Partitions example indices by a splitting rule.
//! Each output keeps the relative order of `examples`.

use std::collections::HashMap;

use crate::error::SplitError;


/// Splits `examples` into `[LESS, GREATER]` by `value <= pivot`.
/// Without pivot every example goes to `LESS`.
pub(crate) fn by_pivot(
    vals: &[f64],
    examples: &[usize],
    pivot: Option<f64>,
) -> [Vec<usize>; 2]
{
    let Some(pivot) = pivot else {
        return [examples.to_vec(), Vec::new()];
    };

    let (less, greater): (Vec<usize>, Vec<usize>) = examples.iter()
        .copied()
        .partition(|&i| vals[i] <= pivot);
    [less, greater]
}


/// Splits `examples` into one part per code in `categories`,
/// in the order of `categories`.
/// Codes absent from `examples` get an empty part.
pub(crate) fn by_category(
    feature: usize,
    codes: &[usize],
    examples: &[usize],
    categories: &[usize],
) -> Result<Vec<Vec<usize>>, SplitError>
{
    let position = categories.iter()
        .enumerate()
        .map(|(k, &code)| (code, k))
        .collect::<HashMap<_, _>>();

    let mut parts = vec![Vec::new(); categories.len()];
    for &i in examples {
        let code = codes[i];
        let k = position.get(&code)
            .ok_or(SplitError::UnknownCategory { feature, code })?;
        parts[*k].push(i);
    }
    Ok(parts)
}
