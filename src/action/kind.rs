//! Action type tags, as dispatched by the client.

pub const V3_LOAD_STREAM_SUCCESS: &str = "V3.LOAD_STREAM_SUCCESS";
pub const V3_LOAD_NEXT_CONTENT_SUCCESS: &str = "V3.LOAD_NEXT_CONTENT_SUCCESS";
pub const V3_LOAD_CATEGORIES_SUCCESS: &str = "V3.LOAD_CATEGORIES_SUCCESS";
pub const V3_LOAD_PAGE_HEADERS_SUCCESS: &str = "V3.LOAD_PAGE_HEADERS_SUCCESS";
pub const V3_POST_DETAIL_SUCCESS: &str = "V3.POST.DETAIL_SUCCESS";
pub const V3_POST_LOAD_MANY_SUCCESS: &str = "V3.POST.LOAD_MANY_SUCCESS";

pub const PROFILE_FOLLOW_CATEGORIES_SUCCESS: &str = "PROFILE.FOLLOW_CATEGORIES_SUCCESS";
pub const PROFILE_UNFOLLOW_CATEGORIES_SUCCESS: &str = "PROFILE.UNFOLLOW_CATEGORIES_SUCCESS";
pub const PROFILE_DELETE_SUCCESS: &str = "PROFILE.DELETE_SUCCESS";
pub const PROFILE_SIGNUP_SUCCESS: &str = "PROFILE.SIGNUP_SUCCESS";

pub const LOAD_STREAM_REQUEST: &str = "LOAD_STREAM_REQUEST";
pub const LOAD_STREAM_SUCCESS: &str = "LOAD_STREAM_SUCCESS";

pub const AUTHENTICATION_CLEAR_AUTH_TOKEN: &str = "AUTHENTICATION.CLEAR_AUTH_TOKEN";
pub const AUTHENTICATION_PUBLIC_SUCCESS: &str = "AUTHENTICATION.PUBLIC_SUCCESS";
pub const AUTHENTICATION_USER_SUCCESS: &str = "AUTHENTICATION.USER_SUCCESS";
pub const AUTHENTICATION_REFRESH_SUCCESS: &str = "AUTHENTICATION.REFRESH_SUCCESS";
pub const AUTHENTICATION_NONCE_SUCCESS: &str = "AUTHENTICATION.NONCE_SUCCESS";
pub const AUTHENTICATION_LOGOUT_SUCCESS: &str = "AUTHENTICATION.LOGOUT_SUCCESS";
pub const AUTHENTICATION_LOGOUT_FAILURE: &str = "AUTHENTICATION.LOGOUT_FAILURE";
pub const AUTHENTICATION_REFRESH_FAILURE: &str = "AUTHENTICATION.REFRESH_FAILURE";
pub const AUTHENTICATION_RESET_PASSWORD_SUCCESS: &str = "AUTHENTICATION.RESET_PASSWORD_SUCCESS";
pub const UPDATE_STATE_FROM_NATIVE: &str = "UPDATE_STATE_FROM_NATIVE";
pub const REHYDRATE: &str = "persist/REHYDRATE";

pub const SET_LAYOUT_MODE: &str = "SET_LAYOUT_MODE";
pub const UPDATE_LOCATION: &str = "UPDATE_LOCATION";
pub const LOCATION_CHANGE: &str = "@@router/LOCATION_CHANGE";
pub const BEACONS_LAST_DISCOVER_VERSION: &str = "BEACONS.LAST_DISCOVER_VERSION";
pub const BEACONS_LAST_FOLLOWING_VERSION: &str = "BEACONS.LAST_FOLLOWING_VERSION";
pub const BEACONS_LAST_STARRED_VERSION: &str = "BEACONS.LAST_STARRED_VERSION";
