use ndarray::{ArrayD, ArrayViewD, IxDyn};

/// Where a grid's initial generation comes from.
///
/// A literal array is snapshotted at construction, so resetting restores the
/// original values even after many generations have replaced the live grid. A
/// generator is re-invoked on every reset, which is how randomized initial
/// distributions are re-seeded.
pub enum GridSource<C> {
    Literal(ArrayD<C>),
    Generator(Box<dyn FnMut() -> ArrayD<C> + Send>),
}

impl<C> GridSource<C> {
    /// A source that re-runs `generate` on every reset.
    pub fn generator(generate: impl FnMut() -> ArrayD<C> + Send + 'static) -> Self {
        GridSource::Generator(Box::new(generate))
    }
}

impl<C: Clone> GridSource<C> {
    fn initial(&mut self) -> ArrayD<C> {
        match self {
            GridSource::Literal(cells) => cells.clone(),
            GridSource::Generator(generate) => generate(),
        }
    }
}

impl<C> From<ArrayD<C>> for GridSource<C> {
    fn from(cells: ArrayD<C>) -> Self {
        GridSource::Literal(cells)
    }
}

impl<C> From<Grid<C>> for GridSource<C> {
    fn from(grid: Grid<C>) -> Self {
        grid.source
    }
}

/// The state of one simulation: the live generation plus the source it can be
/// reset from.
///
/// Only the stepping engine replaces the live generation, and it always does
/// so wholesale; readers never observe a partially written grid.
pub struct Grid<C> {
    cells: ArrayD<C>,
    source: GridSource<C>,
}

impl<C: Clone> Grid<C> {
    /// Make a new grid from a literal array or a [`GridSource`].
    pub fn new(source: impl Into<GridSource<C>>) -> Self {
        let mut source = source.into();
        let cells = source.initial();
        Grid { cells, source }
    }

    /// Make a grid from a shape and the cells that differ from the default
    /// value.
    pub fn from_coords<I>(shape: &[usize], coords: I) -> Self
    where
        C: Default,
        I: IntoIterator<Item = (Vec<usize>, C)>,
    {
        let mut cells = ArrayD::from_elem(IxDyn(shape), C::default());
        for (index, value) in coords {
            cells[&index[..]] = value;
        }
        Grid::new(cells)
    }

    /// A read-only view of the live generation.
    #[inline]
    pub fn current(&self) -> ArrayViewD<'_, C> {
        self.cells.view()
    }

    #[inline]
    pub(crate) fn cells(&self) -> &ArrayD<C> {
        &self.cells
    }

    /// The grid's shape, one extent per dimension.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.cells.shape()
    }

    /// The grid's dimensionality.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.cells.ndim()
    }

    /// Restore the initial distribution by re-invoking the captured source.
    pub fn reset(&mut self) {
        let cells = self.source.initial();
        assert_eq!(
            cells.shape(),
            self.cells.shape(),
            "cellgrid::Grid::reset: generator changed the grid shape"
        );
        self.cells = cells;
    }

    /// Swap in a freshly computed generation of identical shape.
    pub fn replace(&mut self, next: ArrayD<C>) {
        assert_eq!(
            next.shape(),
            self.cells.shape(),
            "cellgrid::Grid::replace: replacement shape differs from grid shape"
        );
        self.cells = next;
    }
}
