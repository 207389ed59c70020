//! Following keeps both sides in sync: the volunteer's followed set and,
//! when the NGO is known, its follower set.

use tracing::info;

use crate::common::{DomainError, NgoId, VolunteerId};
use crate::domains::notification::activities::notify_new_follower;
use crate::domains::volunteer::models::Volunteer;
use crate::kernel::store::update;
use crate::kernel::Store;

pub fn follow_ngo(
    store: &Store,
    volunteer_id: VolunteerId,
    ngo_id: NgoId,
) -> Result<Volunteer, DomainError> {
    let (volunteer, newly_followed) = update(&store.volunteers, &volunteer_id, "volunteer", |v| {
        let added = v.follow(ngo_id);
        Ok((v.clone(), added))
    })?;

    let ngo_known = store
        .ngos
        .get_mut(&ngo_id)
        .map(|mut ngo| ngo.add_follower(volunteer_id))
        .is_some();

    if newly_followed && ngo_known {
        notify_new_follower(store, ngo_id, volunteer_id);
    }

    info!(volunteer_id = %volunteer_id, ngo_id = %ngo_id, "Volunteer followed NGO");
    Ok(volunteer)
}

pub fn unfollow_ngo(
    store: &Store,
    volunteer_id: VolunteerId,
    ngo_id: NgoId,
) -> Result<Volunteer, DomainError> {
    let volunteer = update(&store.volunteers, &volunteer_id, "volunteer", |v| {
        v.unfollow(ngo_id);
        Ok(v.clone())
    })?;

    if let Some(mut ngo) = store.ngos.get_mut(&ngo_id) {
        ngo.remove_follower(volunteer_id);
    }

    info!(volunteer_id = %volunteer_id, ngo_id = %ngo_id, "Volunteer unfollowed NGO");
    Ok(volunteer)
}
