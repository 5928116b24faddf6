use convert_case::{Case, Casing};
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// All the permissions available for the fleet sales API
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    CreateVehicle,
    UpdateVehicle,
    DeleteVehicle,
    ListVehicles,
    CreateBuyer,
}

impl Permission {
    /// the permission in screaming snake case format, eg: `CREATE_VEHICLE`
    pub fn code(&self) -> String {
        self.to_string().to_case(Case::ScreamingSnake)
    }
}

/// User profiles, each one granting a fixed set of permissions
#[derive(Debug, Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[strum(ascii_case_insensitive)]
pub enum Profile {
    #[strum(serialize = "Administrador")]
    #[serde(rename = "Administrador")]
    Administrator,

    #[strum(serialize = "Vendedor")]
    #[serde(rename = "Vendedor")]
    Seller,

    #[strum(serialize = "Responsavel de Frota")]
    #[serde(rename = "Responsavel de Frota")]
    FleetManager,
}

impl Profile {
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Profile::Administrator => &[
                Permission::CreateVehicle,
                Permission::UpdateVehicle,
                Permission::DeleteVehicle,
                Permission::ListVehicles,
                Permission::CreateBuyer,
            ],
            Profile::Seller => &[
                Permission::UpdateVehicle,
                Permission::ListVehicles,
                Permission::CreateBuyer,
            ],
            Profile::FleetManager => &[Permission::ListVehicles],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn permission_codes_are_screaming_snake_case() {
        assert_eq!(Permission::CreateVehicle.code(), "CREATE_VEHICLE");
        assert_eq!(Permission::CreateBuyer.code(), "CREATE_BUYER");
    }

    #[test]
    fn profiles_parse_from_their_descriptions_ignoring_case() {
        assert_eq!(Profile::from_str("Administrador").unwrap(), Profile::Administrator);
        assert_eq!(Profile::from_str("VENDEDOR").unwrap(), Profile::Seller);
        assert_eq!(
            Profile::from_str("responsavel de frota").unwrap(),
            Profile::FleetManager
        );
        assert!(Profile::from_str("Formador").is_err());
    }

    #[test]
    fn only_administrators_create_and_delete_vehicles() {
        for profile in Profile::iter() {
            let perms = profile.permissions();
            let is_admin = profile == Profile::Administrator;

            assert_eq!(perms.contains(&Permission::CreateVehicle), is_admin);
            assert_eq!(perms.contains(&Permission::DeleteVehicle), is_admin);
            assert!(perms.contains(&Permission::ListVehicles));
        }

        assert!(Profile::Seller.permissions().contains(&Permission::UpdateVehicle));
        assert!(!Profile::FleetManager.permissions().contains(&Permission::UpdateVehicle));
        assert!(!Profile::FleetManager.permissions().contains(&Permission::CreateBuyer));
    }
}
