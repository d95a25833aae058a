/// Single-instance mount slot.
///
/// `begin` reserves the slot while asynchronous setup runs, so a second mount
/// during setup is refused just like one after it. An unmount during setup
/// leaves the slot vacant and `complete` hands the half-built value back for
/// disposal.
#[derive(Debug)]
pub enum Mount<T> {
    Vacant,
    Pending,
    Ready(T),
}

impl<T> Default for Mount<T> {
    fn default() -> Self {
        Mount::Vacant
    }
}

impl<T> Mount<T> {
    /// Reserve the slot. False when something is already mounted or mounting.
    pub fn begin(&mut self) -> bool {
        match self {
            Mount::Vacant => {
                *self = Mount::Pending;
                true
            }
            Mount::Pending | Mount::Ready(_) => false,
        }
    }

    /// Install the finished value, or give it back if the mount was aborted.
    pub fn complete(&mut self, value: T) -> Result<(), T> {
        match self {
            Mount::Pending => {
                *self = Mount::Ready(value);
                Ok(())
            }
            Mount::Vacant | Mount::Ready(_) => Err(value),
        }
    }

    /// Give up a pending reservation after a failed setup.
    pub fn abort(&mut self) {
        if matches!(self, Mount::Pending) {
            *self = Mount::Vacant;
        }
    }

    /// Empty the slot, returning the mounted value if there was one.
    pub fn take(&mut self) -> Option<T> {
        match std::mem::replace(self, Mount::Vacant) {
            Mount::Ready(value) => Some(value),
            Mount::Vacant | Mount::Pending => None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        !matches!(self, Mount::Vacant)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Mount::Ready(value) => Some(value),
            _ => None,
        }
    }
}
