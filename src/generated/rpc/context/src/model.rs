// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;

/// The attributes of a network activity, such as an HTTP request.
///
/// An activity involves a source (the caller), a destination (the service
/// receiving the call), the request, the response, the resource, and the API
/// invoked. Each part is optional, services populate only what they know.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttributeContext {
    /// The origin of a network activity. In a multi hop network activity, the
    /// origin represents the sender of the first hop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<attribute_context::Peer>,

    /// The source of a network activity, such as starting a TCP connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<attribute_context::Peer>,

    /// The destination of a network activity, such as accepting a TCP
    /// connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<attribute_context::Peer>,

    /// Represents a network request, such as an HTTP request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<attribute_context::Request>,

    /// Represents a network response, such as an HTTP response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<attribute_context::Response>,

    /// Represents a target resource that is involved with a network activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<attribute_context::Resource>,

    /// Represents an API operation that is involved in a network activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<attribute_context::Api>,

    /// Supports extensions for advanced use cases, such as logs and metrics.
    ///
    /// Each element is a JSON object with an `@type` field.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<serde_json::Map<String, serde_json::Value>>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AttributeContext {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [origin][AttributeContext::origin].
    pub fn set_origin<T: Into<attribute_context::Peer>>(mut self, v: T) -> Self {
        self.origin = Some(v.into());
        self
    }

    /// Sets or clears the value of [origin][AttributeContext::origin].
    pub fn set_or_clear_origin<T: Into<attribute_context::Peer>>(mut self, v: Option<T>) -> Self {
        self.origin = v.map(Into::into);
        self
    }

    /// Sets the value of [source][AttributeContext::source].
    pub fn set_source<T: Into<attribute_context::Peer>>(mut self, v: T) -> Self {
        self.source = Some(v.into());
        self
    }

    /// Sets or clears the value of [source][AttributeContext::source].
    pub fn set_or_clear_source<T: Into<attribute_context::Peer>>(mut self, v: Option<T>) -> Self {
        self.source = v.map(Into::into);
        self
    }

    /// Sets the value of [destination][AttributeContext::destination].
    pub fn set_destination<T: Into<attribute_context::Peer>>(mut self, v: T) -> Self {
        self.destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [destination][AttributeContext::destination].
    pub fn set_or_clear_destination<T: Into<attribute_context::Peer>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.destination = v.map(Into::into);
        self
    }

    /// Sets the value of [request][AttributeContext::request].
    pub fn set_request<T: Into<attribute_context::Request>>(mut self, v: T) -> Self {
        self.request = Some(v.into());
        self
    }

    /// Sets or clears the value of [request][AttributeContext::request].
    pub fn set_or_clear_request<T: Into<attribute_context::Request>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.request = v.map(Into::into);
        self
    }

    /// Sets the value of [response][AttributeContext::response].
    pub fn set_response<T: Into<attribute_context::Response>>(mut self, v: T) -> Self {
        self.response = Some(v.into());
        self
    }

    /// Sets or clears the value of [response][AttributeContext::response].
    pub fn set_or_clear_response<T: Into<attribute_context::Response>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.response = v.map(Into::into);
        self
    }

    /// Sets the value of [resource][AttributeContext::resource].
    pub fn set_resource<T: Into<attribute_context::Resource>>(mut self, v: T) -> Self {
        self.resource = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource][AttributeContext::resource].
    pub fn set_or_clear_resource<T: Into<attribute_context::Resource>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.resource = v.map(Into::into);
        self
    }

    /// Sets the value of [api][AttributeContext::api].
    pub fn set_api<T: Into<attribute_context::Api>>(mut self, v: T) -> Self {
        self.api = Some(v.into());
        self
    }

    /// Sets or clears the value of [api][AttributeContext::api].
    pub fn set_or_clear_api<T: Into<attribute_context::Api>>(mut self, v: Option<T>) -> Self {
        self.api = v.map(Into::into);
        self
    }

    /// Sets the value of [extensions][AttributeContext::extensions].
    pub fn set_extensions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<serde_json::Map<String, serde_json::Value>>,
    {
        self.extensions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Defines additional types related to [AttributeContext].
pub mod attribute_context {
    use super::HashMap;

    /// A network peer: a process, a container, a VM, or a user device.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Peer {
        /// The IP address of the peer.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ip: Option<String>,

        /// The network port of the peer.
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<wkt::internal::I64>")]
        pub port: Option<i64>,

        /// The labels associated with the peer.
        #[serde(skip_serializing_if = "HashMap::is_empty")]
        pub labels: HashMap<String, String>,

        /// The identity of this peer, for example `user:alice@example.com`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub principal: Option<String>,

        /// The CLDR country/region code associated with the peer.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub region_code: Option<String>,

        #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
        _unknown_fields: serde_json::Map<String, serde_json::Value>,
    }

    impl Peer {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [ip][Peer::ip].
        pub fn set_ip<T: Into<String>>(mut self, v: T) -> Self {
            self.ip = Some(v.into());
            self
        }

        /// Sets the value of [port][Peer::port].
        pub fn set_port<T: Into<i64>>(mut self, v: T) -> Self {
            self.port = Some(v.into());
            self
        }

        /// Sets the value of [labels][Peer::labels].
        pub fn set_labels<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }

        /// Sets the value of [principal][Peer::principal].
        pub fn set_principal<T: Into<String>>(mut self, v: T) -> Self {
            self.principal = Some(v.into());
            self
        }

        /// Sets the value of [region_code][Peer::region_code].
        pub fn set_region_code<T: Into<String>>(mut self, v: T) -> Self {
            self.region_code = Some(v.into());
            self
        }
    }

    /// The attributes of an API operation.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Api {
        /// The API service name, for example `pubsub.googleapis.com`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub service: Option<String>,

        /// The API operation name, for example
        /// `google.pubsub.v1.Publisher.Publish`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operation: Option<String>,

        /// The API protocol used for sending the request, such as `http` or
        /// `grpc`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub protocol: Option<String>,

        /// The API version associated with the operation, for example `v1`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub version: Option<String>,

        #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
        _unknown_fields: serde_json::Map<String, serde_json::Value>,
    }

    impl Api {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [service][Api::service].
        pub fn set_service<T: Into<String>>(mut self, v: T) -> Self {
            self.service = Some(v.into());
            self
        }

        /// Sets the value of [operation][Api::operation].
        pub fn set_operation<T: Into<String>>(mut self, v: T) -> Self {
            self.operation = Some(v.into());
            self
        }

        /// Sets the value of [protocol][Api::protocol].
        pub fn set_protocol<T: Into<String>>(mut self, v: T) -> Self {
            self.protocol = Some(v.into());
            self
        }

        /// Sets the value of [version][Api::version].
        pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
            self.version = Some(v.into());
            self
        }
    }

    /// The authentication attributes of a request.
    ///
    /// These come from the credentials presented with the request, typically
    /// a JSON Web Token.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Auth {
        /// The authenticated principal, from the `iss` and `sub` claims.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub principal: Option<String>,

        /// The intended audiences, from the `aud` claim.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub audiences: Vec<String>,

        /// The authorized presenter of the credential, from the `azp` claim.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub presenter: Option<String>,

        /// The structured claims presented with the credential.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub claims: Option<serde_json::Map<String, serde_json::Value>>,

        /// A list of access level resource names that allow resources to be
        /// accessed by authenticated requester.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub access_levels: Vec<String>,

        #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
        _unknown_fields: serde_json::Map<String, serde_json::Value>,
    }

    impl Auth {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [principal][Auth::principal].
        pub fn set_principal<T: Into<String>>(mut self, v: T) -> Self {
            self.principal = Some(v.into());
            self
        }

        /// Sets the value of [audiences][Auth::audiences].
        pub fn set_audiences<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.audiences = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [presenter][Auth::presenter].
        pub fn set_presenter<T: Into<String>>(mut self, v: T) -> Self {
            self.presenter = Some(v.into());
            self
        }

        /// Sets the value of [claims][Auth::claims].
        pub fn set_claims<T: Into<serde_json::Map<String, serde_json::Value>>>(
            mut self,
            v: T,
        ) -> Self {
            self.claims = Some(v.into());
            self
        }

        /// Sets or clears the value of [claims][Auth::claims].
        pub fn set_or_clear_claims<T: Into<serde_json::Map<String, serde_json::Value>>>(
            mut self,
            v: Option<T>,
        ) -> Self {
            self.claims = v.map(Into::into);
            self
        }

        /// Sets the value of [access_levels][Auth::access_levels].
        pub fn set_access_levels<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.access_levels = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    /// The attributes of an HTTP request.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Request {
        /// The unique ID for a request, which can be propagated to downstream
        /// systems.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub id: Option<String>,

        /// The HTTP request method, such as `GET` or `POST`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub method: Option<String>,

        /// The HTTP request headers. Header names are lowercase.
        #[serde(skip_serializing_if = "HashMap::is_empty")]
        pub headers: HashMap<String, String>,

        /// The HTTP URL path, excluding the query parameters.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub path: Option<String>,

        /// The HTTP request `Host` header value.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub host: Option<String>,

        /// The HTTP URL scheme, such as `http` and `https`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub scheme: Option<String>,

        /// The HTTP URL query in the format of `name1=value1&name2=value2`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub query: Option<String>,

        /// The timestamp when the destination service receives the last byte
        /// of the request.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub time: Option<wkt::Timestamp>,

        /// The HTTP request size in bytes. If unknown, it must be -1.
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<wkt::internal::I64>")]
        pub size: Option<i64>,

        /// The network protocol used with the request, such as `http/1.1`,
        /// `spdy/3`, `h2`, `h2c`, `webrtc`, `tcp`, `udp`, `quic`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub protocol: Option<String>,

        /// A special parameter for request reason, used for security and
        /// privacy audits.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reason: Option<String>,

        /// The request authentication.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub auth: Option<Auth>,

        #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
        _unknown_fields: serde_json::Map<String, serde_json::Value>,
    }

    impl Request {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [id][Request::id].
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.id = Some(v.into());
            self
        }

        /// Sets the value of [method][Request::method].
        pub fn set_method<T: Into<String>>(mut self, v: T) -> Self {
            self.method = Some(v.into());
            self
        }

        /// Sets the value of [headers][Request::headers].
        pub fn set_headers<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }

        /// Sets the value of [path][Request::path].
        pub fn set_path<T: Into<String>>(mut self, v: T) -> Self {
            self.path = Some(v.into());
            self
        }

        /// Sets the value of [host][Request::host].
        pub fn set_host<T: Into<String>>(mut self, v: T) -> Self {
            self.host = Some(v.into());
            self
        }

        /// Sets the value of [scheme][Request::scheme].
        pub fn set_scheme<T: Into<String>>(mut self, v: T) -> Self {
            self.scheme = Some(v.into());
            self
        }

        /// Sets the value of [query][Request::query].
        pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
            self.query = Some(v.into());
            self
        }

        /// Sets the value of [time][Request::time].
        pub fn set_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
            self.time = Some(v.into());
            self
        }

        /// Sets or clears the value of [time][Request::time].
        pub fn set_or_clear_time<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
            self.time = v.map(Into::into);
            self
        }

        /// Sets the value of [size][Request::size].
        pub fn set_size<T: Into<i64>>(mut self, v: T) -> Self {
            self.size = Some(v.into());
            self
        }

        /// Sets the value of [protocol][Request::protocol].
        pub fn set_protocol<T: Into<String>>(mut self, v: T) -> Self {
            self.protocol = Some(v.into());
            self
        }

        /// Sets the value of [reason][Request::reason].
        pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
            self.reason = Some(v.into());
            self
        }

        /// Sets the value of [auth][Request::auth].
        pub fn set_auth<T: Into<Auth>>(mut self, v: T) -> Self {
            self.auth = Some(v.into());
            self
        }

        /// Sets or clears the value of [auth][Request::auth].
        pub fn set_or_clear_auth<T: Into<Auth>>(mut self, v: Option<T>) -> Self {
            self.auth = v.map(Into::into);
            self
        }
    }

    /// The attributes of an HTTP response.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Response {
        /// The HTTP response status code, such as `200` and `404`.
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<wkt::internal::I64>")]
        pub code: Option<i64>,

        /// The HTTP response size in bytes. If unknown, it must be -1.
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<wkt::internal::I64>")]
        pub size: Option<i64>,

        /// The HTTP response headers. Header names are lowercase.
        #[serde(skip_serializing_if = "HashMap::is_empty")]
        pub headers: HashMap<String, String>,

        /// The timestamp when the destination service sends the last byte of
        /// the response.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub time: Option<wkt::Timestamp>,

        /// The amount of time it takes the backend service to fully respond to
        /// a request, in the JSON duration format, for example `0.250s`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub backend_latency: Option<String>,

        #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
        _unknown_fields: serde_json::Map<String, serde_json::Value>,
    }

    impl Response {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [code][Response::code].
        pub fn set_code<T: Into<i64>>(mut self, v: T) -> Self {
            self.code = Some(v.into());
            self
        }

        /// Sets the value of [size][Response::size].
        pub fn set_size<T: Into<i64>>(mut self, v: T) -> Self {
            self.size = Some(v.into());
            self
        }

        /// Sets the value of [headers][Response::headers].
        pub fn set_headers<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }

        /// Sets the value of [time][Response::time].
        pub fn set_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
            self.time = Some(v.into());
            self
        }

        /// Sets or clears the value of [time][Response::time].
        pub fn set_or_clear_time<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
            self.time = v.map(Into::into);
            self
        }

        /// Sets the value of [backend_latency][Response::backend_latency].
        pub fn set_backend_latency<T: Into<String>>(mut self, v: T) -> Self {
            self.backend_latency = Some(v.into());
            self
        }
    }

    /// The attributes of a resource targeted by a network activity.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Resource {
        /// The name of the service that this resource belongs to, such as
        /// `displayvideo.googleapis.com`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub service: Option<String>,

        /// The stable identifier (name) of a resource on the `service`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,

        /// The type of the resource, in the `{service}/{Kind}` format.
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        pub r#type: Option<String>,

        /// The labels or tags on the resource.
        #[serde(skip_serializing_if = "HashMap::is_empty")]
        pub labels: HashMap<String, String>,

        /// The unique identifier of the resource, assigned by the server.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub uid: Option<String>,

        /// Annotations is an unstructured key-value map stored with a resource.
        #[serde(skip_serializing_if = "HashMap::is_empty")]
        pub annotations: HashMap<String, String>,

        /// Mutable. The display name set by clients.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub display_name: Option<String>,

        /// The timestamp when the resource was created.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub create_time: Option<wkt::Timestamp>,

        /// The timestamp when the resource was last updated.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub update_time: Option<wkt::Timestamp>,

        /// The timestamp when the resource was deleted.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub delete_time: Option<wkt::Timestamp>,

        /// An opaque value that uniquely identifies a version or generation of
        /// a resource.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub etag: Option<String>,

        /// The location of the resource, such as `us-central1`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<String>,

        #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
        _unknown_fields: serde_json::Map<String, serde_json::Value>,
    }

    impl Resource {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [service][Resource::service].
        pub fn set_service<T: Into<String>>(mut self, v: T) -> Self {
            self.service = Some(v.into());
            self
        }

        /// Sets the value of [name][Resource::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.name = Some(v.into());
            self
        }

        /// Sets the value of [r#type][Resource::type].
        pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
            self.r#type = Some(v.into());
            self
        }

        /// Sets the value of [labels][Resource::labels].
        pub fn set_labels<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }

        /// Sets the value of [uid][Resource::uid].
        pub fn set_uid<T: Into<String>>(mut self, v: T) -> Self {
            self.uid = Some(v.into());
            self
        }

        /// Sets the value of [annotations][Resource::annotations].
        pub fn set_annotations<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.annotations = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }

        /// Sets the value of [display_name][Resource::display_name].
        pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
            self.display_name = Some(v.into());
            self
        }

        /// Sets the value of [create_time][Resource::create_time].
        pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
            self.create_time = Some(v.into());
            self
        }

        /// Sets the value of [update_time][Resource::update_time].
        pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
            self.update_time = Some(v.into());
            self
        }

        /// Sets the value of [delete_time][Resource::delete_time].
        pub fn set_delete_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
            self.delete_time = Some(v.into());
            self
        }

        /// Sets the value of [etag][Resource::etag].
        pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
            self.etag = Some(v.into());
            self
        }

        /// Sets the value of [location][Resource::location].
        pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
            self.location = Some(v.into());
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::attribute_context::*;
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    #[test]
    fn empty() -> Result {
        let got = serde_json::to_value(AttributeContext::new())?;
        assert_eq!(got, json!({}));
        let got = serde_json::from_value::<AttributeContext>(json!({}))?;
        assert_eq!(got, AttributeContext::new());
        Ok(())
    }

    #[test]
    fn serialize_nested() -> Result {
        let input = AttributeContext::new()
            .set_source(Peer::new().set_ip("10.0.0.1").set_port(443))
            .set_request(
                Request::new()
                    .set_method("POST")
                    .set_time(wkt::Timestamp::new(1682942400, 0)?)
                    .set_size(-1)
                    .set_headers([("x-goog-request-reason", "audit")]),
            )
            .set_api(Api::new().set_service("displayvideo.googleapis.com"));
        let got = serde_json::to_value(&input)?;
        let want = json!({
            "source": {"ip": "10.0.0.1", "port": "443"},
            "request": {
                "method": "POST",
                "time": "2023-05-01T12:00:00Z",
                "size": "-1",
                "headers": {"x-goog-request-reason": "audit"}
            },
            "api": {"service": "displayvideo.googleapis.com"}
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn deserialize_nested() -> Result {
        let input = json!({
            "response": {
                "code": "200",
                "size": "9223372036854775807",
                "time": "2023-05-01T14:00:00+02:00",
                "backendLatency": "0.250s"
            },
            "resource": {"type": "displayvideo.googleapis.com/Advertiser", "name": "advertisers/123"}
        });
        let got = serde_json::from_value::<AttributeContext>(input)?;
        let want = AttributeContext::new()
            .set_response(
                Response::new()
                    .set_code(200)
                    .set_size(i64::MAX)
                    .set_time(wkt::Timestamp::new(1682942400, 0)?)
                    .set_backend_latency("0.250s"),
            )
            .set_resource(
                Resource::new()
                    .set_type("displayvideo.googleapis.com/Advertiser")
                    .set_name("advertisers/123"),
            );
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn unknown_fields_roundtrip() -> Result {
        let input = json!({
            "api": {"service": "s", "newApiField": [1, 2, 3]},
            "newTopLevel": {"a": "b"}
        });
        let got = serde_json::from_value::<AttributeContext>(input.clone())?;
        assert_eq!(got.api.as_ref().and_then(|a| a.service.as_deref()), Some("s"));
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn auth_claims() -> Result {
        let input = json!({
            "principal": "user:alice@example.com",
            "audiences": ["https://displayvideo.googleapis.com/"],
            "claims": {"iss": "accounts.google.com", "email_verified": true}
        });
        let got = serde_json::from_value::<Auth>(input.clone())?;
        assert_eq!(got.audiences.len(), 1);
        assert_eq!(
            got.claims.as_ref().and_then(|c| c.get("email_verified")),
            Some(&json!(true))
        );
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test_case(json!({"port": "abc"}); "not a number")]
    #[test_case(json!({"port": "1.5"}); "fractional")]
    #[test_case(json!({"port": "9223372036854775808"}); "overflow")]
    #[test_case(json!({"port": true}); "bad type")]
    fn peer_bad_port(input: serde_json::Value) {
        let got = serde_json::from_value::<Peer>(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn request_bad_time() {
        let got = serde_json::from_value::<Request>(json!({"time": "yesterday"}));
        assert!(got.is_err(), "{got:?}");
    }
}
