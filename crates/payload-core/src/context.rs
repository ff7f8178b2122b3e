use derive_more::{Display, FromStr};

///
/// HttpMethod
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, Hash, PartialEq)]
#[remain::sorted]
pub enum HttpMethod {
    Delete,
    Get,
    Patch,
    Post,
    Put,
}

impl HttpMethod {
    /// Methods whose bulk items carry their identifier through
    /// validation.
    #[must_use]
    pub const fn is_update(self) -> bool {
        matches!(self, Self::Patch | Self::Put)
    }
}

///
/// RequestContext
///
/// Transport facts a serializer operation needs, passed explicitly into
/// each call. There is no ambient request state.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RequestContext {
    pub method: HttpMethod,
}

impl RequestContext {
    #[must_use]
    pub const fn new(method: HttpMethod) -> Self {
        Self { method }
    }
}
