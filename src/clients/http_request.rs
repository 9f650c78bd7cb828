//! HTTP request types for method dispatch.

use std::fmt;

/// HTTP methods used by the VK API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Parameters travel in the query string.
    #[default]
    Get,
    /// Parameters travel in a form-encoded body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// A fully resolved request ready for the transport.
///
/// # Example
///
/// ```rust
/// use vk_api::clients::{HttpRequest, HttpMethod};
///
/// let request = HttpRequest::builder(HttpMethod::Post, "https://api.vk.com/method/execute.json")
///     .param("code", "return 1;")
///     .build();
///
/// assert_eq!(request.http_method, HttpMethod::Post);
/// assert_eq!(request.params.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// Absolute URL.
    pub url: String,
    /// Encoded as a query string for GET and as a form body for POST.
    pub params: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    params: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the given method and URL.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            params: Vec::new(),
        }
    }

    /// Appends one parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Appends many parameters in order.
    #[must_use]
    pub fn params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builds the request.
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            url: self.url,
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
    }

    #[test]
    fn test_builder_keeps_parameter_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://example.com")
            .param("b", "2")
            .params(vec![("a", "1"), ("c", "3")])
            .build();

        assert_eq!(
            request.params,
            vec![
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string()),
                ("c".to_string(), "3".to_string()),
            ]
        );
    }
}
