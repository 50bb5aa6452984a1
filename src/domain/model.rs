use crate::utils::error::{OrgError, Result};
use crate::utils::validation;
use std::fmt;
use std::rc::Rc;

/// A postal address. Built once, owned by exactly one [`Person`], never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street_line1: String,
    pub street_line2: String,
    pub city: String,
    pub postal_code: String,
}

impl Address {
    pub fn new(
        street_line1: impl Into<String>,
        street_line2: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street_line1: street_line1.into(),
            street_line2: street_line2.into(),
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Street Line 1: {}", self.street_line1)?;
        writeln!(f, "Street Line 2: {}", self.street_line2)?;
        writeln!(f, "City: {}", self.city)?;
        write!(f, "Postal Code: {}", self.postal_code)
    }
}

/// A member of the organization.
///
/// Email and phone are validated before any field is assigned, so a `Person`
/// that exists always satisfies both shape predicates. `manager` is `None`
/// for the top of the hierarchy.
#[derive(Debug)]
pub struct Person {
    name: String,
    email: String,
    phone: String,
    address: Address,
    manager: Option<Rc<Person>>,
}

impl Person {
    /// Email is checked before phone: an invalid email reports only
    /// [`OrgError::InvalidEmail`], without reaching the phone check.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: Address,
        manager: Option<Rc<Person>>,
    ) -> Result<Self> {
        let name = name.into();
        let email = email.into();
        let phone = phone.into();

        if !validation::is_valid_email(&email) {
            return Err(OrgError::InvalidEmail { name, value: email });
        }
        if !validation::is_valid_phone_no(&phone) {
            return Err(OrgError::InvalidPhoneNumber { name, value: phone });
        }

        Ok(Self {
            name,
            email,
            phone,
            address,
            manager,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn manager(&self) -> Option<&Person> {
        self.manager.as_deref()
    }

    /// Walks the reporting chain upward: the manager, the manager's manager,
    /// and so on, ending at the first person with no manager.
    pub fn chain_of_command(&self) -> ChainOfCommand<'_> {
        ChainOfCommand {
            next: self.manager.as_deref(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name =  {}", self.name)?;
        writeln!(f, "email = {}", self.email)?;
        write!(f, "phone = {}", self.phone)?;
        // No manager, no line. Not printed as empty.
        if let Some(manager) = &self.manager {
            write!(f, "\nmanager = {}", manager.name)?;
        }
        Ok(())
    }
}

pub struct ChainOfCommand<'a> {
    next: Option<&'a Person>,
}

impl<'a> Iterator for ChainOfCommand<'a> {
    type Item = &'a Person;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.manager.as_deref();
        Some(current)
    }
}
