use crate::domain::catalog::{CatalogRepository, Department, Skill, Wing};
use crate::domain::employees::{Employee, EmployeeRepository, ExperienceRecord, NewEmployee};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory catalog with a small fixed data set.
#[derive(Clone)]
pub struct MockCatalogRepository {
    skills: Vec<Skill>,
    wings: Vec<Wing>,
    departments: HashMap<i64, Vec<Department>>,
    failing: bool,
}

impl Default for MockCatalogRepository {
    fn default() -> Self {
        let skill = |id, name: &str| Skill {
            id,
            name: name.to_string(),
        };
        let department = |id, name: &str| Department {
            id,
            name: name.to_string(),
        };
        Self {
            skills: vec![skill(1, "Rust"), skill(2, "SQL"), skill(3, "Design")],
            wings: vec![
                Wing {
                    id: 1,
                    name: "Engineering".to_string(),
                },
                Wing {
                    id: 2,
                    name: "Operations".to_string(),
                },
            ],
            departments: HashMap::from([
                (1, vec![department(10, "Platform"), department(11, "Mobile")]),
                (2, vec![department(20, "Payroll"), department(21, "Facilities")]),
            ]),
            failing: false,
        }
    }
}

impl MockCatalogRepository {
    /// A catalog whose every lookup fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_departments(wing_id: i64, departments: Vec<Department>) -> Self {
        let mut repo = Self::default();
        repo.departments.insert(wing_id, departments);
        repo
    }

    fn check(&self) -> Result<(), anyhow::Error> {
        if self.failing {
            Err(anyhow!("catalog unavailable"))
        } else {
            Ok(())
        }
    }

    fn skill(&self, id: i64) -> Skill {
        self.skills
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .unwrap_or(Skill {
                id,
                name: format!("Skill {id}"),
            })
    }

    fn wing(&self, id: i64) -> Wing {
        self.wings
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .unwrap_or(Wing {
                id,
                name: format!("Wing {id}"),
            })
    }

    fn department(&self, id: i64) -> Department {
        self.departments
            .values()
            .flatten()
            .find(|d| d.id == id)
            .cloned()
            .unwrap_or(Department {
                id,
                name: format!("Department {id}"),
            })
    }
}

#[async_trait]
impl CatalogRepository for MockCatalogRepository {
    async fn skills(&self) -> Result<Vec<Skill>, anyhow::Error> {
        self.check()?;
        Ok(self.skills.clone())
    }

    async fn wings(&self) -> Result<Vec<Wing>, anyhow::Error> {
        self.check()?;
        Ok(self.wings.clone())
    }

    async fn departments(&self, wing_id: i64) -> Result<Vec<Department>, anyhow::Error> {
        self.check()?;
        Ok(self.departments.get(&wing_id).cloned().unwrap_or_default())
    }
}

/// In-memory employee store. Ids are assigned sequentially from 1 and
/// references are resolved against a [`MockCatalogRepository`].
#[derive(Clone, Default)]
pub struct MockEmployeeRepository {
    employees: Arc<Mutex<Vec<Employee>>>,
    catalog: MockCatalogRepository,
}

impl MockEmployeeRepository {
    pub fn with_catalog(catalog: MockCatalogRepository) -> Self {
        Self {
            employees: Arc::default(),
            catalog,
        }
    }

    fn materialize(&self, id: i64, new_employee: NewEmployee) -> Employee {
        Employee {
            id,
            first_name: new_employee.first_name,
            last_name: new_employee.last_name,
            gender: Some(new_employee.gender),
            date_of_birth: Some(new_employee.date_of_birth),
            age: Some(new_employee.age),
            date_of_joined: Some(new_employee.date_of_joined),
            address: new_employee.address,
            skills: new_employee
                .skills
                .iter()
                .map(|s| self.catalog.skill(s.id))
                .collect(),
            wing: Some(self.catalog.wing(new_employee.wing.id)),
            department: Some(self.catalog.department(new_employee.department.id)),
            has_experience: new_employee.has_experience,
            experiences: new_employee
                .experiences
                .into_iter()
                .map(ExperienceRecord::from)
                .collect(),
            total_experience: new_employee.total_experience,
            photo: new_employee.photo,
        }
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, anyhow::Error> {
        let mut employees = self
            .employees
            .lock()
            .map_err(|_| anyhow!("employee store poisoned"))?;
        let id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let employee = self.materialize(id, new_employee);
        employees.push(employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, anyhow::Error> {
        let employees = self
            .employees
            .lock()
            .map_err(|_| anyhow!("employee store poisoned"))?;
        Ok(employees.iter().find(|e| e.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, anyhow::Error> {
        let employees = self
            .employees
            .lock()
            .map_err(|_| anyhow!("employee store poisoned"))?;
        Ok(employees.clone())
    }

    async fn update(
        &self,
        id: i64,
        employee: NewEmployee,
    ) -> Result<Option<Employee>, anyhow::Error> {
        let mut employees = self
            .employees
            .lock()
            .map_err(|_| anyhow!("employee store poisoned"))?;
        let Some(slot) = employees.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        *slot = self.materialize(id, employee);
        Ok(Some(slot.clone()))
    }
}
