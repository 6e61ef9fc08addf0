use crate::error::ApiError;

/// Resultado de una carga en segundo plano (listas, analytics).
/// Nunca se muestra como error: `Stale` conserva el último valor bueno.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Fresh(T),
    Stale { cached: T, error: ApiError },
    /// La vista se desmontó antes de que llegara la respuesta
    Discarded,
}

impl<T> LoadOutcome<T> {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale { .. })
    }

    pub fn is_discarded(&self) -> bool {
        matches!(self, Self::Discarded)
    }

    /// Dato visible tras la carga (fresco o el último bueno)
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Fresh(data) | Self::Stale { cached: data, .. } => Some(data),
            Self::Discarded => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Stale { error, .. } => Some(error),
            _ => None,
        }
    }
}
