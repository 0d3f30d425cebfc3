use as3_declaration::PoolMember;

use crate::bundle::Bundle;
use crate::error::TranslateError;

/// Build the pool member entry for member `id`.
///
/// The member is always read from the bundle's flat member collection, never
/// from the copy embedded in a pool.
pub fn build_member(bundle: &Bundle, id: &str) -> Result<PoolMember, TranslateError> {
    let found = bundle.member(id)?;
    Ok(PoolMember {
        service_port: found.protocol_port,
        server_addresses: vec![found.address.clone()],
    })
}

#[cfg(test)]
mod tests {
    use as3_declaration::PoolMember;
    use pretty_assertions::assert_eq;

    use crate::error::{EntityKind, TranslateError};
    use crate::translate::fixtures::sample_bundle;

    use super::build_member;

    #[test]
    fn uses_flat_collection_port_and_address() {
        let bundle = sample_bundle();
        let member = build_member(&bundle, "m1").expect("m1 exists");
        assert_eq!(
            member,
            PoolMember {
                service_port: 8080,
                server_addresses: vec!["10.0.0.2".to_string()],
            }
        );
    }

    #[test]
    fn missing_member_is_not_found() {
        let bundle = sample_bundle();
        assert_eq!(
            build_member(&bundle, "m9"),
            Err(TranslateError::not_found(EntityKind::Member, "m9"))
        );
    }
}
