/// A live chart owned by a renderer; destroying it releases the canvas.
pub trait ChartHandle {
    fn destroy(&mut self);
}

/// Exclusive owner of one chart slot.
///
/// Each redraw destroys the previous handle before the new one is installed,
/// and dropping the session destroys whatever is still live.
#[derive(Debug)]
pub struct ChartSession<H: ChartHandle> {
    current: Option<H>,
    redraws: u64,
}

impl<H: ChartHandle> Default for ChartSession<H> {
    fn default() -> Self {
        Self {
            current: None,
            redraws: 0,
        }
    }
}

impl<H: ChartHandle> ChartSession<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tears down the live chart, then installs the one built by `build`.
    ///
    /// `build` returning `None` (nothing to render) leaves the slot empty.
    pub fn redraw<F>(&mut self, build: F) -> Option<&mut H>
    where
        F: FnOnce() -> Option<H>,
    {
        self.clear();
        self.redraws += 1;
        self.current = build();
        self.current.as_mut()
    }

    pub fn clear(&mut self) {
        if let Some(mut handle) = self.current.take() {
            handle.destroy();
        }
    }

    pub fn current(&self) -> Option<&H> {
        self.current.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }
}

impl<H: ChartHandle> Drop for ChartSession<H> {
    fn drop(&mut self) {
        self.clear();
    }
}
