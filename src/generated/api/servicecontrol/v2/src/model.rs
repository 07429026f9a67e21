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

use rpc_context::model::AttributeContext;
use rpc_context::model::attribute_context;
use std::collections::HashMap;

/// Request message for the Check method.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CheckRequest {
    /// The service name as specified in its service configuration, for
    /// example `"pubsub.googleapis.com"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,

    /// Specifies the version of the service configuration that should be used
    /// to process the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_config_id: Option<String>,

    /// Describes attributes about the operation being executed by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeContext>,

    /// Describes the resources and the policies applied to each resource.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceInfo>,

    /// Optional. Contains a comma-separated list of flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CheckRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_name][CheckRequest::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = Some(v.into());
        self
    }

    /// Sets the value of [service_config_id][CheckRequest::service_config_id].
    pub fn set_service_config_id<T: Into<String>>(mut self, v: T) -> Self {
        self.service_config_id = Some(v.into());
        self
    }

    /// Sets the value of [attributes][CheckRequest::attributes].
    pub fn set_attributes<T: Into<AttributeContext>>(mut self, v: T) -> Self {
        self.attributes = Some(v.into());
        self
    }

    /// Sets or clears the value of [attributes][CheckRequest::attributes].
    pub fn set_or_clear_attributes<T: Into<AttributeContext>>(mut self, v: Option<T>) -> Self {
        self.attributes = v.map(Into::into);
        self
    }

    /// Sets the value of [resources][CheckRequest::resources].
    pub fn set_resources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ResourceInfo>,
    {
        self.resources = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [flags][CheckRequest::flags].
    pub fn set_flags<T: Into<String>>(mut self, v: T) -> Self {
        self.flags = Some(v.into());
        self
    }
}

/// Describes a resource referenced in the request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceInfo {
    /// The name of the resource referenced in the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The resource type in the format of `{service}/{kind}`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// The resource permission needed for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,

    /// Optional. The identifier of the container of this resource, for
    /// example `projects/123`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,

    /// Optional. The location of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ResourceInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][ResourceInfo::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [r#type][ResourceInfo::type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [permission][ResourceInfo::permission].
    pub fn set_permission<T: Into<String>>(mut self, v: T) -> Self {
        self.permission = Some(v.into());
        self
    }

    /// Sets the value of [container][ResourceInfo::container].
    pub fn set_container<T: Into<String>>(mut self, v: T) -> Self {
        self.container = Some(v.into());
        self
    }

    /// Sets the value of [location][ResourceInfo::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }
}

/// Response message for the Check method.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CheckResponse {
    /// Operation is allowed when this field is not set. Any non-'OK' status
    /// indicates a denial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<gax::error::rpc::Status>,

    /// Returns a set of request contexts generated from the `CheckRequest`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CheckResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [status][CheckResponse::status].
    pub fn set_status<T: Into<gax::error::rpc::Status>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets or clears the value of [status][CheckResponse::status].
    pub fn set_or_clear_status<T: Into<gax::error::rpc::Status>>(mut self, v: Option<T>) -> Self {
        self.status = v.map(Into::into);
        self
    }

    /// Sets the value of [headers][CheckResponse::headers].
    pub fn set_headers<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Request message for the Report method.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReportRequest {
    /// The service name as specified in its service configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,

    /// Specifies the version of the service configuration that should be used
    /// to process the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_config_id: Option<String>,

    /// Describes the list of operations to be reported. Each operation is
    /// represented as an `AttributeContext`, and contains all attributes
    /// around an API access.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<AttributeContext>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ReportRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_name][ReportRequest::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = Some(v.into());
        self
    }

    /// Sets the value of [service_config_id][ReportRequest::service_config_id].
    pub fn set_service_config_id<T: Into<String>>(mut self, v: T) -> Self {
        self.service_config_id = Some(v.into());
        self
    }

    /// Sets the value of [operations][ReportRequest::operations].
    pub fn set_operations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AttributeContext>,
    {
        self.operations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Response message for the Report method.
///
/// The service currently returns an empty message. Fields added later are
/// preserved.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReportResponse {
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ReportResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// Common audit log format for Google Cloud Platform API operations.
///
/// Services attach it to the `extensions` of the reported
/// [AttributeContext], with `"@type": "type.googleapis.com/google.cloud.audit.AuditLog"`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AuditLog {
    /// The name of the API service performing the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,

    /// The name of the service method or operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,

    /// The resource or collection that is the target of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,

    /// The resource location information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_location: Option<ResourceLocation>,

    /// The resource's original state before mutation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_original_state: Option<serde_json::Map<String, serde_json::Value>>,

    /// The number of items returned from a List or Query API method, if
    /// applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<wkt::internal::U64>")]
    pub num_response_items: Option<u64>,

    /// The status of the overall operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<gax::error::rpc::Status>,

    /// Authentication information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_info: Option<AuthenticationInfo>,

    /// Authorization information. If there are multiple resources or
    /// permissions involved, then there is one entry per resource and
    /// permission pair.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authorization_info: Vec<AuthorizationInfo>,

    /// Indicates the policy violations for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_violation_info: Option<PolicyViolationInfo>,

    /// Metadata about the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_metadata: Option<RequestMetadata>,

    /// The operation request, with `@type` set to the request message type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<serde_json::Map<String, serde_json::Value>>,

    /// The operation response, with `@type` set to the response message type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Map<String, serde_json::Value>>,

    /// Other service-specific data about the request, response, and other
    /// information associated with the current audited event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AuditLog {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_name][AuditLog::service_name].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = Some(v.into());
        self
    }

    /// Sets the value of [method_name][AuditLog::method_name].
    pub fn set_method_name<T: Into<String>>(mut self, v: T) -> Self {
        self.method_name = Some(v.into());
        self
    }

    /// Sets the value of [resource_name][AuditLog::resource_name].
    pub fn set_resource_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_name = Some(v.into());
        self
    }

    /// Sets the value of [resource_location][AuditLog::resource_location].
    pub fn set_resource_location<T: Into<ResourceLocation>>(mut self, v: T) -> Self {
        self.resource_location = Some(v.into());
        self
    }

    /// Sets the value of [resource_original_state][AuditLog::resource_original_state].
    pub fn set_resource_original_state<T: Into<serde_json::Map<String, serde_json::Value>>>(
        mut self,
        v: T,
    ) -> Self {
        self.resource_original_state = Some(v.into());
        self
    }

    /// Sets the value of [num_response_items][AuditLog::num_response_items].
    pub fn set_num_response_items<T: Into<u64>>(mut self, v: T) -> Self {
        self.num_response_items = Some(v.into());
        self
    }

    /// Sets the value of [status][AuditLog::status].
    pub fn set_status<T: Into<gax::error::rpc::Status>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets or clears the value of [status][AuditLog::status].
    pub fn set_or_clear_status<T: Into<gax::error::rpc::Status>>(mut self, v: Option<T>) -> Self {
        self.status = v.map(Into::into);
        self
    }

    /// Sets the value of [authentication_info][AuditLog::authentication_info].
    pub fn set_authentication_info<T: Into<AuthenticationInfo>>(mut self, v: T) -> Self {
        self.authentication_info = Some(v.into());
        self
    }

    /// Sets the value of [authorization_info][AuditLog::authorization_info].
    pub fn set_authorization_info<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AuthorizationInfo>,
    {
        self.authorization_info = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [policy_violation_info][AuditLog::policy_violation_info].
    pub fn set_policy_violation_info<T: Into<PolicyViolationInfo>>(mut self, v: T) -> Self {
        self.policy_violation_info = Some(v.into());
        self
    }

    /// Sets the value of [request_metadata][AuditLog::request_metadata].
    pub fn set_request_metadata<T: Into<RequestMetadata>>(mut self, v: T) -> Self {
        self.request_metadata = Some(v.into());
        self
    }

    /// Sets or clears the value of [request_metadata][AuditLog::request_metadata].
    pub fn set_or_clear_request_metadata<T: Into<RequestMetadata>>(mut self, v: Option<T>) -> Self {
        self.request_metadata = v.map(Into::into);
        self
    }

    /// Sets the value of [request][AuditLog::request].
    pub fn set_request<T: Into<serde_json::Map<String, serde_json::Value>>>(mut self, v: T) -> Self {
        self.request = Some(v.into());
        self
    }

    /// Sets the value of [response][AuditLog::response].
    pub fn set_response<T: Into<serde_json::Map<String, serde_json::Value>>>(
        mut self,
        v: T,
    ) -> Self {
        self.response = Some(v.into());
        self
    }

    /// Sets the value of [metadata][AuditLog::metadata].
    pub fn set_metadata<T: Into<serde_json::Map<String, serde_json::Value>>>(
        mut self,
        v: T,
    ) -> Self {
        self.metadata = Some(v.into());
        self
    }
}

/// Authentication information for the operation.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AuthenticationInfo {
    /// The email address of the authenticated user (or service account on
    /// behalf of third party principal) making the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_email: Option<String>,

    /// The authority selector specified by the requestor, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_selector: Option<String>,

    /// The third party identification (if any) of the authenticated user
    /// making the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party_principal: Option<serde_json::Map<String, serde_json::Value>>,

    /// The name of the service account key used to create or exchange
    /// credentials for authenticating the service account making the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_key_name: Option<String>,

    /// Identity delegation history of an authenticated service account that
    /// makes the request.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service_account_delegation_info: Vec<ServiceAccountDelegationInfo>,

    /// String representation of identity of requesting party.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_subject: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AuthenticationInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [principal_email][AuthenticationInfo::principal_email].
    pub fn set_principal_email<T: Into<String>>(mut self, v: T) -> Self {
        self.principal_email = Some(v.into());
        self
    }

    /// Sets the value of [authority_selector][AuthenticationInfo::authority_selector].
    pub fn set_authority_selector<T: Into<String>>(mut self, v: T) -> Self {
        self.authority_selector = Some(v.into());
        self
    }

    /// Sets the value of [third_party_principal][AuthenticationInfo::third_party_principal].
    pub fn set_third_party_principal<T: Into<serde_json::Map<String, serde_json::Value>>>(
        mut self,
        v: T,
    ) -> Self {
        self.third_party_principal = Some(v.into());
        self
    }

    /// Sets the value of [service_account_key_name][AuthenticationInfo::service_account_key_name].
    pub fn set_service_account_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_account_key_name = Some(v.into());
        self
    }

    /// Sets the value of [service_account_delegation_info][AuthenticationInfo::service_account_delegation_info].
    pub fn set_service_account_delegation_info<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ServiceAccountDelegationInfo>,
    {
        self.service_account_delegation_info = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [principal_subject][AuthenticationInfo::principal_subject].
    pub fn set_principal_subject<T: Into<String>>(mut self, v: T) -> Self {
        self.principal_subject = Some(v.into());
        self
    }
}

/// Identity delegation history of an authenticated service account.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceAccountDelegationInfo {
    /// A string representing the principal_subject associated with the
    /// identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_subject: Option<String>,

    /// First party (Google) identity as the real authority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_party_principal: Option<serde_json::Map<String, serde_json::Value>>,

    /// Third party identity as the real authority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party_principal: Option<serde_json::Map<String, serde_json::Value>>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ServiceAccountDelegationInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [principal_subject][ServiceAccountDelegationInfo::principal_subject].
    pub fn set_principal_subject<T: Into<String>>(mut self, v: T) -> Self {
        self.principal_subject = Some(v.into());
        self
    }
}

/// Authorization information for the operation.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AuthorizationInfo {
    /// The resource being accessed, as a REST-style or cloud resource string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    /// The required IAM permission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,

    /// Whether or not authorization for `resource` and `permission`
    /// was granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granted: Option<bool>,

    /// Resource attributes used in IAM condition evaluation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_attributes: Option<attribute_context::Resource>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AuthorizationInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource][AuthorizationInfo::resource].
    pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
        self.resource = Some(v.into());
        self
    }

    /// Sets the value of [permission][AuthorizationInfo::permission].
    pub fn set_permission<T: Into<String>>(mut self, v: T) -> Self {
        self.permission = Some(v.into());
        self
    }

    /// Sets the value of [granted][AuthorizationInfo::granted].
    pub fn set_granted<T: Into<bool>>(mut self, v: T) -> Self {
        self.granted = Some(v.into());
        self
    }

    /// Sets the value of [resource_attributes][AuthorizationInfo::resource_attributes].
    pub fn set_resource_attributes<T: Into<attribute_context::Resource>>(mut self, v: T) -> Self {
        self.resource_attributes = Some(v.into());
        self
    }
}

/// Metadata about the request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RequestMetadata {
    /// The IP address of the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_ip: Option<String>,

    /// The user agent of the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_supplied_user_agent: Option<String>,

    /// The network of the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_network: Option<String>,

    /// Request attributes used in IAM condition evaluation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_attributes: Option<attribute_context::Request>,

    /// The destination of a network activity, such as accepting a TCP
    /// connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_attributes: Option<attribute_context::Peer>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RequestMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [caller_ip][RequestMetadata::caller_ip].
    pub fn set_caller_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.caller_ip = Some(v.into());
        self
    }

    /// Sets the value of [caller_supplied_user_agent][RequestMetadata::caller_supplied_user_agent].
    pub fn set_caller_supplied_user_agent<T: Into<String>>(mut self, v: T) -> Self {
        self.caller_supplied_user_agent = Some(v.into());
        self
    }

    /// Sets the value of [caller_network][RequestMetadata::caller_network].
    pub fn set_caller_network<T: Into<String>>(mut self, v: T) -> Self {
        self.caller_network = Some(v.into());
        self
    }

    /// Sets the value of [request_attributes][RequestMetadata::request_attributes].
    pub fn set_request_attributes<T: Into<attribute_context::Request>>(mut self, v: T) -> Self {
        self.request_attributes = Some(v.into());
        self
    }

    /// Sets the value of [destination_attributes][RequestMetadata::destination_attributes].
    pub fn set_destination_attributes<T: Into<attribute_context::Peer>>(mut self, v: T) -> Self {
        self.destination_attributes = Some(v.into());
        self
    }
}

/// Location information about a resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceLocation {
    /// The locations of a resource after the execution of the operation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub current_locations: Vec<String>,

    /// The locations of a resource prior to the execution of the operation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub original_locations: Vec<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ResourceLocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [current_locations][ResourceLocation::current_locations].
    pub fn set_current_locations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.current_locations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [original_locations][ResourceLocation::original_locations].
    pub fn set_original_locations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.original_locations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Information related to policy violations for this request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PolicyViolationInfo {
    /// Indicates the orgpolicy violations for this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_policy_violation_info: Option<OrgPolicyViolationInfo>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PolicyViolationInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [org_policy_violation_info][PolicyViolationInfo::org_policy_violation_info].
    pub fn set_org_policy_violation_info<T: Into<OrgPolicyViolationInfo>>(mut self, v: T) -> Self {
        self.org_policy_violation_info = Some(v.into());
        self
    }
}

/// Represents OrgPolicy Violation information.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OrgPolicyViolationInfo {
    /// Resource payload that is currently in scope and is subjected to orgpolicy
    /// conditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Map<String, serde_json::Value>>,

    /// Resource type that the orgpolicy is checked against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// Tags referenced on the resource at the time of evaluation.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub resource_tags: HashMap<String, String>,

    /// Policy violations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violation_info: Vec<ViolationInfo>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl OrgPolicyViolationInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_type][OrgPolicyViolationInfo::resource_type].
    pub fn set_resource_type<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_type = Some(v.into());
        self
    }

    /// Sets the value of [resource_tags][OrgPolicyViolationInfo::resource_tags].
    pub fn set_resource_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.resource_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [violation_info][OrgPolicyViolationInfo::violation_info].
    pub fn set_violation_info<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ViolationInfo>,
    {
        self.violation_info = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Provides information about the policy violation.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ViolationInfo {
    /// Constraint name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,

    /// Error message that policy is indicating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Value that is being checked for the policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_value: Option<String>,

    /// Indicates the type of the policy, for example `BOOLEAN_CONSTRAINT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ViolationInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [constraint][ViolationInfo::constraint].
    pub fn set_constraint<T: Into<String>>(mut self, v: T) -> Self {
        self.constraint = Some(v.into());
        self
    }

    /// Sets the value of [error_message][ViolationInfo::error_message].
    pub fn set_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.error_message = Some(v.into());
        self
    }

    /// Sets the value of [checked_value][ViolationInfo::checked_value].
    pub fn set_checked_value<T: Into<String>>(mut self, v: T) -> Self {
        self.checked_value = Some(v.into());
        self
    }

    /// Sets the value of [policy_type][ViolationInfo::policy_type].
    pub fn set_policy_type<T: Into<String>>(mut self, v: T) -> Self {
        self.policy_type = Some(v.into());
        self
    }
}
