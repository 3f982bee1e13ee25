diesel::table! {
    t_wine (id) {
        id -> Text,
        name -> Text,
        grape -> Nullable<Text>,
        country -> Nullable<Text>,
        vintage -> Nullable<Integer>,
        location -> Nullable<Text>,
        quantity -> Integer,
        price -> Nullable<Double>,
        photo_url -> Nullable<Text>,
        created_at -> BigInt,
    }
}
