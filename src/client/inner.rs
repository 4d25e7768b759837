//! Internal client implementation.

use url::Url;

use crate::http::Pipeline;

pub(crate) struct ClientInner {
    /// The API base URL.
    pub(crate) base_url: Url,

    /// Shared request pipeline; every endpoint group delegates here.
    pub(crate) pipeline: Pipeline,
}
