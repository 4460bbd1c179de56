//! Type definitions for the Yousign SDK.
//!
//! Resource types are deserialized defensively: missing or `null` fields fall
//! back to their defaults and unknown fields are ignored. Request types carry the
//! field rules for their operation in `validate`.

use crate::error::{Result, YousignError};
use crate::validation;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A user of the organization.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// Server identifier, e.g. `/users/<uuid>`.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lastname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub permission: Option<String>,
    pub organization: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub workspaces: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub deleted: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A signer or validator attached to a procedure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Member {
    /// Server identifier, e.g. `/members/<uuid>`.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lastname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub phone: Option<String>,
    pub status: Option<String>,
    /// Member type ("signer", "validator").
    #[serde(rename = "type")]
    pub member_type: Option<String>,
    /// Owning procedure identifier.
    pub procedure: Option<String>,
    pub position: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A signature procedure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Procedure {
    /// Server identifier, e.g. `/procedures/<uuid>`.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub status: Option<String>,
    pub start: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub members: Vec<Member>,
    #[serde(deserialize_with = "null_as_default")]
    pub files: Vec<FileRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub config: Map<String, Value>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub finished_at: Option<String>,
}

/// Kind of file uploaded to a procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// A document members sign.
    #[default]
    Signable,
    /// A document attached to a procedure for information.
    Attachment,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Signable => "signable",
            FileType::Attachment => "attachment",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = YousignError;

    fn from_str(s: &str) -> Result<Self> {
        validation::one_of("type", s, &["signable", "attachment"])?;
        Ok(if s == "attachment" {
            FileType::Attachment
        } else {
            FileType::Signable
        })
    }
}

/// An uploaded file. The content is not included; use
/// [`FilesClient::contents`](crate::files::FilesClient::contents).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileRecord {
    /// Server identifier, e.g. `/files/<uuid>`.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Type as received; see [`FileRecord::kind`].
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub content_type: Option<String>,
    pub description: Option<String>,
    pub procedure: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A signature placement binding a member to a page of a file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileObject {
    /// Server identifier, e.g. `/file_objects/<uuid>`.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub file: Option<Value>,
    pub member: Option<Value>,
    pub page: Option<u32>,
    pub position: Option<String>,
    pub field_name: Option<String>,
    pub mention: Option<String>,
    pub mention2: Option<String>,
    pub reason: Option<String>,
    pub created_at: Option<String>,
    pub executed_at: Option<String>,
}

impl FileRecord {
    /// The file type, if it is one this client knows about.
    pub fn kind(&self) -> Option<FileType> {
        self.file_type.as_deref().and_then(|t| t.parse().ok())
    }
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

macro_rules! impl_uuid_accessor {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                /// The UUID embedded in the server identifier.
                pub fn uuid(&self) -> Option<Uuid> {
                    validation::extract_uuid(&self.id)
                }
            }
        )*
    };
}

impl_uuid_accessor!(User, Member, Procedure, FileRecord, FileObject);

/// Request to create a user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUserRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// Phone number in E.164 format.
    pub phone: String,
}

impl CreateUserRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        validation::non_empty("firstname", &self.firstname)?;
        validation::non_empty("lastname", &self.lastname)?;
        validation::email("email", &self.email)?;
        validation::phone("phone", &self.phone)
    }
}

/// Request to add a member to a procedure.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateMemberRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// Phone number in E.164 format.
    pub phone: String,
    /// Procedure identifier, bare UUID or `/procedures/<uuid>`.
    pub procedure: String,
}

impl CreateMemberRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        validation::non_empty("firstname", &self.firstname)?;
        validation::non_empty("lastname", &self.lastname)?;
        validation::email("email", &self.email)?;
        validation::phone("phone", &self.phone)?;
        validation::uuid_loose("procedure", &self.procedure)
    }
}

/// Request to upload a file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateFileRequest {
    /// File name, must end in `.pdf`.
    pub name: String,
    /// Standard base64 of the file, without any `data:` prefix.
    pub content: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Required for attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure: Option<String>,
}

impl CreateFileRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        validation::pdf_filename("name", &self.name)?;
        validation::base64_content("content", &self.content)?;
        match (&self.file_type, &self.procedure) {
            (FileType::Attachment, None) => Err(YousignError::argument(
                "procedure",
                "is required when type is attachment",
            )),
            (_, Some(procedure)) => validation::uuid_loose("procedure", procedure),
            (FileType::Signable, None) => Ok(()),
        }
    }
}

/// Request to place a signature on a file for a member.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFileObjectRequest {
    /// File identifier, bare UUID or `/files/<uuid>`.
    pub file: String,
    /// Member identifier, bare UUID or `/members/<uuid>`.
    pub member: String,
    /// 1-based page number.
    pub page: u32,
    /// Signature box as "llx,lly,urx,ury".
    pub position: String,
    pub reason: String,
    pub mention: String,
    pub mention2: String,
}

impl Default for CreateFileObjectRequest {
    fn default() -> Self {
        Self {
            file: String::new(),
            member: String::new(),
            page: 1,
            position: String::new(),
            reason: String::new(),
            mention: String::new(),
            mention2: String::new(),
        }
    }
}

impl CreateFileObjectRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        validation::uuid_loose("file", &self.file)?;
        validation::uuid_loose("member", &self.member)?;
        if self.page == 0 {
            return Err(YousignError::argument("page", "must be 1 or greater"));
        }
        validation::non_empty("position", &self.position)?;
        validation::non_empty("reason", &self.reason)
    }
}

/// Request to create a procedure.
///
/// `start` defaults to `true`, in which case `members` must be non-empty.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProcedureRequest {
    pub name: String,
    pub description: String,
    pub start: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Value>>,
    pub config: Map<String, Value>,
}

impl Default for CreateProcedureRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            start: true,
            members: None,
            config: Map::new(),
        }
    }
}

impl CreateProcedureRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        validation::non_empty("name", &self.name)?;
        match self.members.as_deref() {
            _ if !self.start => Ok(()),
            None => Err(YousignError::argument(
                "members",
                "are required when start is true",
            )),
            Some([]) => Err(YousignError::argument(
                "members",
                "must not be empty when start is true",
            )),
            Some(_) => Ok(()),
        }
    }
}

/// Partial update of a procedure; only the fields set are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProcedureRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,
}

impl UpdateProcedureRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        match &self.name {
            Some(name) => validation::non_empty("name", name),
            None => Ok(()),
        }
    }
}
