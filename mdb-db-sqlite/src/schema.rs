///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> Text,
        username -> Text,
        email -> Text,
        password -> Text,
        full_name -> Text,
        role -> SmallInt,
        mosque_identifier -> Nullable<Text>,
        is_verified -> Bool,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Mosques
///////////////////////////////////////////////////////////////////////

table! {
    mosques (id) {
        id -> Text,
        identifier -> Text,
        name -> Text,
        address -> Text,
        city -> Text,
        phone -> Nullable<Text>,
        email -> Nullable<Text>,
        latitude -> Text,
        longitude -> Text,
        image_url -> Nullable<Text>,
        status -> SmallInt,
        is_verified -> Bool,
        women_section -> Bool,
        accessible_entrance -> Bool,
        parking -> Bool,
        wudu_facilities -> Bool,
        quran_classes -> Bool,
        community_hall -> Bool,
        created_by -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    mosque_images (mosque_id, position) {
        mosque_id -> Text,
        position -> Integer,
        url -> Text,
    }
}

joinable!(mosques -> users (created_by));
joinable!(mosque_images -> mosques (mosque_id));

///////////////////////////////////////////////////////////////////////
// Prayer times
///////////////////////////////////////////////////////////////////////

table! {
    prayer_times (id) {
        id -> Text,
        mosque_id -> Text,
        fajr -> Text,
        fajr_azaan -> Nullable<Text>,
        fajr_days -> Text,
        dhuhr -> Text,
        dhuhr_azaan -> Nullable<Text>,
        dhuhr_days -> Text,
        asr -> Text,
        asr_azaan -> Nullable<Text>,
        asr_days -> Text,
        maghrib -> Text,
        maghrib_azaan -> Nullable<Text>,
        maghrib_days -> Text,
        isha -> Text,
        isha_azaan -> Nullable<Text>,
        isha_days -> Text,
        jummuah -> Nullable<Text>,
        updated_at -> BigInt,
    }
}

joinable!(prayer_times -> mosques (mosque_id));

///////////////////////////////////////////////////////////////////////
// Events
///////////////////////////////////////////////////////////////////////

table! {
    events (id) {
        id -> Text,
        mosque_id -> Text,
        name -> Text,
        description -> Nullable<Text>,
        date -> Text,
        time -> Text,
        is_recurring -> Bool,
        created_at -> BigInt,
    }
}

joinable!(events -> mosques (mosque_id));

allow_tables_to_appear_in_same_query!(users, mosques, mosque_images, prayer_times, events);
