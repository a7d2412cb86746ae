use enum_iterator::IntoEnumIterator;
use ndarray::{ArrayD, ArrayViewD, IxDyn};

/// How neighbor coordinates falling outside the grid are resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoEnumIterator)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RetrievalMode {
    /// Out-of-range coordinates wrap to the opposite edge, making the grid a
    /// torus.
    Wrapping,
    /// Out-of-range coordinates read as the default (dead) cell value, as if
    /// the grid were surrounded by an infinite zero padding.
    Padded,
}

/// Extract the window of `shape` centered on `index`.
///
/// The window cell at local offset `o` maps to the source coordinate
/// `index[d] + o[d] - shape[d] / 2` in each dimension `d`, so the focal cell
/// sits at the floor-division center of the window. Sources outside the grid
/// are resolved by `mode`; in padded mode the bounds check happens before any
/// indexing, never by patching up a wrapped fetch.
pub(crate) fn window<C>(
    cells: ArrayViewD<'_, C>,
    index: &[usize],
    shape: &[usize],
    mode: RetrievalMode,
) -> ArrayD<C>
where
    C: Clone + Default,
{
    ArrayD::from_shape_fn(IxDyn(shape), |offset| {
        let mut source = Vec::with_capacity(index.len());
        for d in 0..index.len() {
            let extent = cells.shape()[d] as isize;
            let position = index[d] as isize + offset[d] as isize - (shape[d] / 2) as isize;
            match mode {
                RetrievalMode::Wrapping => source.push(position.rem_euclid(extent) as usize),
                RetrievalMode::Padded => {
                    if position < 0 || position >= extent {
                        return C::default();
                    }
                    source.push(position as usize);
                }
            }
        }
        cells[&source[..]].clone()
    })
}
