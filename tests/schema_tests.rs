#![allow(clippy::unwrap_used, clippy::expect_used)]

use shadpanel::naming::ResourceIdentity;
use shadpanel::resolve::resolve_model;
use shadpanel::schema::{parse_schema, FieldKind, ScalarType};

const SHOP_SCHEMA: &str = r#"// Shop schema
generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

model User {
  id        String   @id @default(dbgenerated("gen_random_uuid()"))
  email     String   @unique
  name      String?
  role      Role     @default(CUSTOMER)
  orders    Order[]
  profile   Profile?
  createdAt DateTime @default(now())

  @@map("users")
}

model Order {
  id       Int         @id @default(autoincrement())
  user     User        @relation(fields: [userId], references: [id])
  userId   String
  total    Decimal
  metadata Json?
  lines    OrderLine[]
}

model OrderLine {
  orderId  Int
  sku      String
  quantity Int   @default(1)
  order    Order @relation(fields: [orderId], references: [id])

  @@id([orderId, sku])
}

// declared after its first use
enum Role {
  CUSTOMER
  ADMIN // staff only
  @@map("roles")
}
"#;

#[test]
fn test_parsing_is_deterministic() {
    assert_eq!(parse_schema(SHOP_SCHEMA), parse_schema(SHOP_SCHEMA));
}

#[test]
fn test_models_and_enums_in_declaration_order() {
    let schema = parse_schema(SHOP_SCHEMA);
    assert_eq!(schema.model_names(), vec!["User", "Order", "OrderLine"]);
    assert_eq!(schema.enum_members("Role"), ["CUSTOMER", "ADMIN"]);
}

#[test]
fn test_every_field_has_exactly_one_kind() {
    let schema = parse_schema(SHOP_SCHEMA);
    for model in schema.models.values() {
        for field in &model.fields {
            let flags = [
                field.scalar().is_some(),
                field.is_enum(),
                field.is_relation(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{}.{}", model.name, field.name);
        }
    }
}

#[test]
fn test_enum_declared_later_is_still_an_enum() {
    let schema = parse_schema(SHOP_SCHEMA);
    let role = schema.models["User"].fields.iter().find(|f| f.name == "role").unwrap();
    assert_eq!(role.kind, FieldKind::Enum);
    assert_eq!(role.default_expression.as_deref(), Some("CUSTOMER"));
}

#[test]
fn test_field_details() {
    let schema = parse_schema(SHOP_SCHEMA);
    let user = &schema.models["User"];

    let id = user.identifier().unwrap();
    assert_eq!(id.name, "id");
    assert_eq!(
        id.default_expression.as_deref(),
        Some(r#"dbgenerated("gen_random_uuid()")"#)
    );
    assert!(!user.identifier_is_numeric());

    let names: Vec<_> = user.form_fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["email", "name", "role", "createdAt"]);

    let order = &schema.models["Order"];
    assert!(order.identifier_is_numeric());
    let total = order.fields.iter().find(|f| f.name == "total").unwrap();
    assert_eq!(total.kind, FieldKind::Scalar(ScalarType::Decimal));
    let metadata = order.fields.iter().find(|f| f.name == "metadata").unwrap();
    assert!(!metadata.required);
    assert_eq!(metadata.scalar(), Some(ScalarType::Json));
}

#[test]
fn test_compound_key_model_has_no_identifier() {
    let schema = parse_schema(SHOP_SCHEMA);
    let line = &schema.models["OrderLine"];
    assert!(line.identifier().is_none());
    // `@@id([...])` is a block attribute, not a field
    assert!(line.fields.iter().all(|f| !f.name.starts_with("@@")));
}

#[test]
fn test_resolution_and_identity() {
    let schema = parse_schema(SHOP_SCHEMA);
    for input in ["orderLine", "orderlines", "ORDERLINE", "OrderLines"] {
        let model = resolve_model(input, &schema).unwrap();
        assert_eq!(model.name, "OrderLine", "{input}");
    }
    let identity = ResourceIdentity::derive("OrderLine");
    assert_eq!(identity.kebab_path, "order-lines");
    assert_eq!(identity.human_label, "Order Lines");
    assert_eq!(ResourceIdentity::derive(&identity.plural), identity);
}
