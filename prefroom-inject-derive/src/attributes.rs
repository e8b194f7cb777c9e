use syn::spanned::Spanned;
use syn::{Attribute, Error, LitStr, Meta};

pub struct InjectAttributes {
    pub type_name: Option<LitStr>,
}

impl TryFrom<&Attribute> for InjectAttributes {
    type Error = Error;

    fn try_from(value: &Attribute) -> Result<Self, Self::Error> {
        let mut type_name = None;

        match &value.meta {
            // bare #[inject] carries no arguments
            Meta::Path(_) => {}
            Meta::List(_) => {
                value.parse_nested_meta(|meta| {
                    if meta.path.is_ident("type_name") {
                        type_name = Some(meta.value().and_then(|value| value.parse())?);
                        Ok(())
                    } else {
                        Err(meta.error("Unsupported inject attribute!"))
                    }
                })?;
            }
            Meta::NameValue(_) => {
                return Err(Error::new(value.span(), "Unsupported inject attribute!"));
            }
        }

        Ok(Self { type_name })
    }
}

pub struct InjectionTargetAttributes {
    pub component: LitStr,
    pub name: Option<LitStr>,
    pub type_name: Option<LitStr>,
}

impl TryFrom<&Attribute> for InjectionTargetAttributes {
    type Error = Error;

    fn try_from(value: &Attribute) -> Result<Self, Self::Error> {
        let mut component = None;
        let mut name = None;
        let mut type_name = None;
        value.parse_nested_meta(|meta| {
            if meta.path.is_ident("component") {
                component = Some(meta.value().and_then(|value| value.parse())?);
            } else if meta.path.is_ident("name") {
                name = Some(meta.value().and_then(|value| value.parse())?);
            } else if meta.path.is_ident("type_name") {
                type_name = Some(meta.value().and_then(|value| value.parse())?);
            } else {
                return Err(meta.error("Unsupported injection_target attribute!"));
            }

            Ok(())
        })?;

        let component = component.ok_or_else(|| {
            Error::new(
                value.span(),
                "Missing owning component: #[injection_target(component = \"...\")]",
            )
        })?;

        Ok(Self {
            component,
            name,
            type_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::attributes::{InjectAttributes, InjectionTargetAttributes};
    use syn::{parse_quote, Attribute};

    #[test]
    fn should_parse_bare_inject() {
        let attribute: Attribute = parse_quote!(#[inject]);

        assert!(InjectAttributes::try_from(&attribute)
            .unwrap()
            .type_name
            .is_none());
    }

    #[test]
    fn should_parse_inject_type_name() {
        let attribute: Attribute = parse_quote!(#[inject(type_name = "Preference_User")]);

        assert_eq!(
            InjectAttributes::try_from(&attribute)
                .unwrap()
                .type_name
                .unwrap()
                .value(),
            "Preference_User"
        );
    }

    #[test]
    fn should_reject_inject_name_value() {
        let attribute: Attribute = parse_quote!(#[inject = "Preference_User"]);

        assert_eq!(
            InjectAttributes::try_from(&attribute)
                .err()
                .unwrap()
                .to_string(),
            "Unsupported inject attribute!"
        );
    }

    #[test]
    fn should_reject_unknown_inject_argument() {
        let attribute: Attribute = parse_quote!(#[inject(name = "user")]);

        assert!(InjectAttributes::try_from(&attribute).is_err());
    }

    #[test]
    fn should_require_owning_component() {
        let attribute: Attribute = parse_quote!(#[injection_target(name = "Main")]);

        assert!(InjectionTargetAttributes::try_from(&attribute).is_err());
    }
}
