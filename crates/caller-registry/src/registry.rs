//! Owner-gated registry over two inverse indices.

use crate::error::RegistryError;
use crate::types::{Identity, Registration, RegistryEvent};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The registry state: the owner plus both inverse indices.
///
/// All mutation is routed through the methods below; each call either fully
/// applies its effect or fails with the state untouched. Entries in
/// `phone_to_agency_name` and `agency_to_phone` exist pairwise or not at
/// all; callers that need concurrent access must serialize writers (the API
/// service wraps this in an `RwLock`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    /// The single identity authorized to mutate the registry
    owner: Identity,

    /// Phone number -> agency display name
    phone_to_agency_name: HashMap<String, String>,

    /// Agency identity -> phone number
    agency_to_phone: HashMap<Identity, String>,
}

impl Registry {
    /// Create an empty registry owned by `owner`.
    pub fn new(owner: Identity) -> Self {
        Self {
            owner,
            phone_to_agency_name: HashMap::new(),
            agency_to_phone: HashMap::new(),
        }
    }

    /// The current owner.
    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    /// Number of live registrations.
    pub fn count(&self) -> usize {
        self.agency_to_phone.len()
    }

    /// Bind a phone number to an agency.
    ///
    /// Owner-only. Fails if either string argument is empty or if the phone
    /// number or agency already has a live registration. Both indices are
    /// updated together.
    pub fn register_phone_number(
        &mut self,
        caller: &Identity,
        agency: Identity,
        phone_number: String,
        agency_name: String,
    ) -> Result<RegistryEvent, RegistryError> {
        if caller != &self.owner {
            return Err(RegistryError::NotOwner);
        }
        if agency.is_empty() {
            return Err(RegistryError::InvalidArgument(
                "agency identity must not be empty".into(),
            ));
        }
        if phone_number.is_empty() {
            return Err(RegistryError::InvalidArgument(
                "phone number must not be empty".into(),
            ));
        }
        if agency_name.is_empty() {
            return Err(RegistryError::InvalidArgument(
                "agency name must not be empty".into(),
            ));
        }
        if self.phone_to_agency_name.contains_key(&phone_number) {
            return Err(RegistryError::PhoneAlreadyRegistered(phone_number));
        }
        if self.agency_to_phone.contains_key(&agency) {
            return Err(RegistryError::AgencyAlreadyRegistered(
                agency.as_str().to_string(),
            ));
        }

        self.phone_to_agency_name
            .insert(phone_number.clone(), agency_name.clone());
        self.agency_to_phone
            .insert(agency.clone(), phone_number.clone());

        Ok(RegistryEvent::PhoneNumberRegistered {
            agency,
            phone_number,
            agency_name,
        })
    }

    /// Remove an agency's registration, clearing both indices.
    ///
    /// Owner-only. The bound phone number is read first so the event can
    /// report it; both entries are removed before returning.
    pub fn revoke_phone_number(
        &mut self,
        caller: &Identity,
        agency: &Identity,
    ) -> Result<RegistryEvent, RegistryError> {
        if caller != &self.owner {
            return Err(RegistryError::NotOwner);
        }
        let phone_number = self
            .agency_to_phone
            .get(agency)
            .cloned()
            .ok_or_else(|| RegistryError::AgencyNotRegistered(agency.as_str().to_string()))?;

        self.phone_to_agency_name.remove(&phone_number);
        self.agency_to_phone.remove(agency);

        Ok(RegistryEvent::PhoneNumberRevoked {
            agency: agency.clone(),
            phone_number,
        })
    }

    /// Look up the agency display name bound to a phone number.
    pub fn get_agency_name_by_phone(&self, phone_number: &str) -> Result<&str, RegistryError> {
        self.phone_to_agency_name
            .get(phone_number)
            .map(String::as_str)
            .ok_or_else(|| RegistryError::PhoneNotRegistered(phone_number.to_string()))
    }

    /// Look up the phone number bound to an agency.
    pub fn get_agency_phone(&self, agency: &Identity) -> Result<&str, RegistryError> {
        self.agency_to_phone
            .get(agency)
            .map(String::as_str)
            .ok_or_else(|| RegistryError::AgencyNotRegistered(agency.as_str().to_string()))
    }

    /// Boolean probe: does `phone_number` belong to `agency`?
    ///
    /// Returns false for an unregistered agency or a mismatched phone
    /// number; deliberately never fails.
    pub fn verify_agency_phone(&self, agency: &Identity, phone_number: &str) -> bool {
        self.agency_to_phone
            .get(agency)
            .map(|registered| registered == phone_number)
            .unwrap_or(false)
    }

    /// Reassign ownership. Owner-only.
    pub fn transfer_ownership(
        &mut self,
        caller: &Identity,
        new_owner: Identity,
    ) -> Result<RegistryEvent, RegistryError> {
        if caller != &self.owner {
            return Err(RegistryError::NotOwner);
        }
        let previous_owner = std::mem::replace(&mut self.owner, new_owner.clone());
        Ok(RegistryEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
        })
    }

    /// All live registrations, joined across both indices.
    pub fn list(&self) -> Vec<Registration> {
        let mut registrations: Vec<Registration> = self
            .agency_to_phone
            .iter()
            .filter_map(|(agency, phone)| {
                self.phone_to_agency_name
                    .get(phone)
                    .map(|name| Registration {
                        agency: agency.clone(),
                        phone_number: phone.clone(),
                        agency_name: name.clone(),
                    })
            })
            .collect();
        registrations.sort_by(|a, b| a.phone_number.cmp(&b.phone_number));
        registrations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Identity {
        Identity::new("0xOwner")
    }

    fn registry() -> Registry {
        Registry::new(owner())
    }

    #[test]
    fn test_register_and_lookup() {
        let mut reg = registry();
        reg.register_phone_number(
            &owner(),
            Identity::new("0xAgency1"),
            "+61000000".into(),
            "Department of Example".into(),
        )
        .unwrap();

        assert_eq!(
            reg.get_agency_name_by_phone("+61000000").unwrap(),
            "Department of Example"
        );
        assert_eq!(
            reg.get_agency_phone(&Identity::new("0xAgency1")).unwrap(),
            "+61000000"
        );
        assert!(reg.verify_agency_phone(&Identity::new("0xAgency1"), "+61000000"));
        assert_eq!(reg.count(), 1);
    }

    #[test]
    fn test_register_emits_event() {
        let mut reg = registry();
        let event = reg
            .register_phone_number(
                &owner(),
                Identity::new("0xAgency1"),
                "+61000000".into(),
                "Department of Example".into(),
            )
            .unwrap();

        assert_eq!(
            event,
            RegistryEvent::PhoneNumberRegistered {
                agency: Identity::new("0xAgency1"),
                phone_number: "+61000000".into(),
                agency_name: "Department of Example".into(),
            }
        );
    }

    #[test]
    fn test_non_owner_cannot_register() {
        let mut reg = registry();
        let err = reg
            .register_phone_number(
                &Identity::new("0xCaller"),
                Identity::new("0xCaller"),
                "+61999999".into(),
                "Unauthorized Department".into(),
            )
            .unwrap_err();

        assert_eq!(err, RegistryError::NotOwner);
        assert_eq!(err.to_string(), "Caller is not the owner");
        assert_eq!(reg.count(), 0);
    }

    #[test]
    fn test_duplicate_phone_rejected() {
        let mut reg = registry();
        reg.register_phone_number(
            &owner(),
            Identity::new("0xAgency1"),
            "+61000000".into(),
            "Department of Example".into(),
        )
        .unwrap();

        let err = reg
            .register_phone_number(
                &owner(),
                Identity::new("0xAgency2"),
                "+61000000".into(),
                "Another Department".into(),
            )
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::PhoneAlreadyRegistered("+61000000".into())
        );
        // First registration is intact
        assert_eq!(
            reg.get_agency_name_by_phone("+61000000").unwrap(),
            "Department of Example"
        );
        assert!(reg.get_agency_phone(&Identity::new("0xAgency2")).is_err());
    }

    #[test]
    fn test_duplicate_agency_rejected() {
        let mut reg = registry();
        reg.register_phone_number(
            &owner(),
            Identity::new("0xAgency1"),
            "+61000000".into(),
            "Department of Example".into(),
        )
        .unwrap();

        let err = reg
            .register_phone_number(
                &owner(),
                Identity::new("0xAgency1"),
                "+61111111".into(),
                "Department of Example".into(),
            )
            .unwrap_err();

        assert_eq!(err, RegistryError::AgencyAlreadyRegistered("0xAgency1".into()));
        assert!(reg.get_agency_name_by_phone("+61111111").is_err());
    }

    #[test]
    fn test_empty_arguments_rejected() {
        let mut reg = registry();

        let err = reg
            .register_phone_number(
                &owner(),
                Identity::new("0xAgency1"),
                "".into(),
                "Department of Example".into(),
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument(_)));

        let err = reg
            .register_phone_number(
                &owner(),
                Identity::new("0xAgency1"),
                "+61000000".into(),
                "".into(),
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument(_)));

        let err = reg
            .register_phone_number(
                &owner(),
                Identity::new(""),
                "+61000000".into(),
                "Department of Example".into(),
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument(_)));

        assert_eq!(reg.count(), 0);
    }

    #[test]
    fn test_revoke_clears_both_indices() {
        let mut reg = registry();
        let agency = Identity::new("0xAgency1");
        reg.register_phone_number(
            &owner(),
            agency.clone(),
            "+61000000".into(),
            "Department of Example".into(),
        )
        .unwrap();

        let event = reg.revoke_phone_number(&owner(), &agency).unwrap();
        assert_eq!(
            event,
            RegistryEvent::PhoneNumberRevoked {
                agency: agency.clone(),
                phone_number: "+61000000".into(),
            }
        );

        assert_eq!(
            reg.get_agency_name_by_phone("+61000000").unwrap_err(),
            RegistryError::PhoneNotRegistered("+61000000".into())
        );
        assert_eq!(
            reg.get_agency_phone(&agency).unwrap_err(),
            RegistryError::AgencyNotRegistered("0xAgency1".into())
        );
        assert!(!reg.verify_agency_phone(&agency, "+61000000"));
        assert_eq!(reg.count(), 0);
    }

    #[test]
    fn test_revoke_unregistered_agency() {
        let mut reg = registry();
        let err = reg
            .revoke_phone_number(&owner(), &Identity::new("0xAgency1"))
            .unwrap_err();
        assert_eq!(err, RegistryError::AgencyNotRegistered("0xAgency1".into()));
    }

    #[test]
    fn test_non_owner_cannot_revoke() {
        let mut reg = registry();
        let agency = Identity::new("0xAgency1");
        reg.register_phone_number(
            &owner(),
            agency.clone(),
            "+61000000".into(),
            "Department of Example".into(),
        )
        .unwrap();

        let err = reg
            .revoke_phone_number(&Identity::new("0xCaller"), &agency)
            .unwrap_err();
        assert_eq!(err, RegistryError::NotOwner);

        // Registration untouched
        assert!(reg.verify_agency_phone(&agency, "+61000000"));
    }

    #[test]
    fn test_verify_never_fails() {
        let mut reg = registry();
        reg.register_phone_number(
            &owner(),
            Identity::new("0xAgency1"),
            "+61000000".into(),
            "Department of Example".into(),
        )
        .unwrap();
        reg.register_phone_number(
            &owner(),
            Identity::new("0xAgency2"),
            "+61111111".into(),
            "Ministry of Testing".into(),
        )
        .unwrap();

        assert!(reg.verify_agency_phone(&Identity::new("0xAgency1"), "+61000000"));
        assert!(reg.verify_agency_phone(&Identity::new("0xAgency2"), "+61111111"));

        // Mismatched pairs
        assert!(!reg.verify_agency_phone(&Identity::new("0xAgency1"), "+61111111"));
        assert!(!reg.verify_agency_phone(&Identity::new("0xAgency2"), "+61000000"));

        // Unregistered agency
        assert!(!reg.verify_agency_phone(&Identity::new("0xCaller"), "+61000000"));

        // Unregistered phone
        assert!(!reg.verify_agency_phone(&Identity::new("0xAgency1"), "+61999999"));
    }

    #[test]
    fn test_transfer_ownership() {
        let mut reg = registry();
        let event = reg
            .transfer_ownership(&owner(), Identity::new("0xAgency1"))
            .unwrap();

        assert_eq!(
            event,
            RegistryEvent::OwnershipTransferred {
                previous_owner: owner(),
                new_owner: Identity::new("0xAgency1"),
            }
        );
        assert_eq!(reg.owner(), &Identity::new("0xAgency1"));

        // Old owner lost its powers
        let err = reg
            .register_phone_number(
                &owner(),
                Identity::new("0xAgency2"),
                "+61000000".into(),
                "Department of Example".into(),
            )
            .unwrap_err();
        assert_eq!(err, RegistryError::NotOwner);

        // New owner has them
        reg.register_phone_number(
            &Identity::new("0xAgency1"),
            Identity::new("0xAgency2"),
            "+61000000".into(),
            "Department of Example".into(),
        )
        .unwrap();
    }

    #[test]
    fn test_non_owner_cannot_transfer_ownership() {
        let mut reg = registry();
        let err = reg
            .transfer_ownership(&Identity::new("0xCaller"), Identity::new("0xAgency1"))
            .unwrap_err();
        assert_eq!(err, RegistryError::NotOwner);
        assert_eq!(reg.owner(), &owner());
    }

    #[test]
    fn test_revoked_phone_can_be_reregistered() {
        let mut reg = registry();
        let agency1 = Identity::new("0xAgency1");
        reg.register_phone_number(
            &owner(),
            agency1.clone(),
            "+61000000".into(),
            "Department of Example".into(),
        )
        .unwrap();
        reg.revoke_phone_number(&owner(), &agency1).unwrap();

        // Both the phone number and the agency are free again
        reg.register_phone_number(
            &owner(),
            agency1.clone(),
            "+61000000".into(),
            "Department of Example".into(),
        )
        .unwrap();
        assert!(reg.verify_agency_phone(&agency1, "+61000000"));
    }

    #[test]
    fn test_list_joins_both_indices() {
        let mut reg = registry();
        reg.register_phone_number(
            &owner(),
            Identity::new("0xAgency2"),
            "+61111111".into(),
            "Ministry of Testing".into(),
        )
        .unwrap();
        reg.register_phone_number(
            &owner(),
            Identity::new("0xAgency1"),
            "+61000000".into(),
            "Department of Example".into(),
        )
        .unwrap();

        let list = reg.list();
        assert_eq!(list.len(), 2);
        // Sorted by phone number
        assert_eq!(list[0].phone_number, "+61000000");
        assert_eq!(list[0].agency_name, "Department of Example");
        assert_eq!(list[1].phone_number, "+61111111");
        assert_eq!(list[1].agency, Identity::new("0xAgency2"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut reg = registry();
        reg.register_phone_number(
            &owner(),
            Identity::new("0xAgency1"),
            "+61000000".into(),
            "Department of Example".into(),
        )
        .unwrap();

        let json = serde_json::to_string(&reg).unwrap();
        let restored: Registry = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.owner(), &owner());
        assert!(restored.verify_agency_phone(&Identity::new("0xAgency1"), "+61000000"));
        assert_eq!(
            restored.get_agency_name_by_phone("+61000000").unwrap(),
            "Department of Example"
        );
    }
}
