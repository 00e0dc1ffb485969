/// The raw contact-form body as submitted by the website.
///
/// Every field is optional at the parsing stage; presence of the required
/// fields is checked when constructing a
/// [`NewInquiry`](crate::domain::new_inquiry::NewInquiry), so that an
/// incomplete body flows through the same generic-failure path as any other
/// workflow error instead of being rejected by the deserializer.
#[derive(serde::Deserialize, Debug)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub number: Option<String>,
    pub message: Option<String>,
    pub occasion: Option<String>,
}
