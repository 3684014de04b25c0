//! Keeping user and product identifiers apart when both are strings.

use branded::brand;
use std::collections::HashMap;

brand! {
    /// Identifier of a user account.
    pub type UserId = String as "shop::UserId";
    /// Identifier of a catalogue product.
    pub type ProductId = String as "shop::ProductId";
}

#[derive(Default)]
struct Shop {
    carts: HashMap<UserId, Vec<ProductId>>,
}

impl Shop {
    fn add_to_cart(&mut self, user: &UserId, product: ProductId) {
        self.carts.entry(user.clone()).or_default().push(product);
    }

    fn cart(&self, user: &UserId) -> &[ProductId] {
        self.carts.get(user).map(Vec::as_slice).unwrap_or_default()
    }
}

fn parse_user_id(raw: &str) -> anyhow::Result<UserId> {
    let id = UserId::try_new_with(raw.to_string(), |s| {
        if s.starts_with("u-") {
            Ok(())
        } else {
            Err("user ids start with `u-`")
        }
    })?;
    Ok(id)
}

fn main() -> anyhow::Result<()> {
    println!("Branded identifiers");
    println!("===================");

    let ada = parse_user_id("u-ada")?;
    let lamp = ProductId::assume("p-lamp".to_string());

    let mut shop = Shop::default();
    shop.add_to_cart(&ada, lamp);
    // shop.add_to_cart(&lamp, ada);   // does not compile: arguments swapped

    println!("cart of {ada}: {:?}", shop.cart(&ada));
    println!("id length (read through Deref): {}", ada.len());

    match parse_user_id("ada") {
        Ok(id) => println!("unexpectedly accepted {id}"),
        Err(err) => println!("rejected: {err}"),
    }

    println!("size_of::<UserId>() = {}", std::mem::size_of::<UserId>());
    println!("size_of::<String>() = {}", std::mem::size_of::<String>());
    Ok(())
}
