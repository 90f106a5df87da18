use super::catalog::{Department, IdRef, Skill, Wing};
use super::photo::{self, PhotoDataUri};
use crate::shared::dates::iso_date;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("Gender must be either 'Male' or 'Female', got '{other}'")),
        }
    }
}

/// Employee as stored and returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default, with = "iso_date::option")]
    pub date_of_birth: Option<Date>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default, with = "iso_date::option")]
    pub date_of_joined: Option<Date>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub wing: Option<Wing>,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default)]
    pub has_experience: bool,
    #[serde(default)]
    pub experiences: Vec<ExperienceRecord>,
    #[serde(default)]
    pub total_experience: String,
    #[serde(default, with = "photo::wire")]
    pub photo: Option<PhotoDataUri>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default, with = "iso_date::option")]
    pub from_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub to_date: Option<Date>,
    #[serde(default)]
    pub experience: String,
}

/// Submission payload for create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    #[serde(with = "iso_date")]
    pub date_of_birth: Date,
    pub age: i32,
    #[serde(with = "iso_date")]
    pub date_of_joined: Date,
    pub address: String,
    pub skills: Vec<IdRef>,
    pub wing: IdRef,
    pub department: IdRef,
    pub has_experience: bool,
    pub experiences: Vec<NewExperience>,
    pub total_experience: String,
    #[serde(default, with = "photo::wire")]
    pub photo: Option<PhotoDataUri>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExperience {
    pub location: String,
    pub organization: String,
    #[serde(with = "iso_date")]
    pub from_date: Date,
    #[serde(with = "iso_date")]
    pub to_date: Date,
    pub experience: String,
}

impl From<NewExperience> for ExperienceRecord {
    fn from(e: NewExperience) -> Self {
        Self {
            location: e.location,
            organization: e.organization,
            from_date: Some(e.from_date),
            to_date: Some(e.to_date),
            experience: e.experience,
        }
    }
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, anyhow::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, anyhow::Error>;
    async fn find_all(&self) -> Result<Vec<Employee>, anyhow::Error>;
    /// `None` when no employee has this id.
    async fn update(&self, id: i64, employee: NewEmployee)
    -> Result<Option<Employee>, anyhow::Error>;
}
