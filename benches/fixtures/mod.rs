//! Synthetic GraphQL sources for the parse benchmarks.

pub const SMALL_SCHEMA: &str = r#"
"A user of the system."
type User implements Node {
  id: ID!
  name: String!
  email: String
  friends(first: Int = 10, after: String): UserConnection
}

interface Node {
  id: ID!
}

type UserConnection {
  edges: [UserEdge!]!
  pageInfo: PageInfo!
}

type UserEdge {
  node: User!
  cursor: String!
}

type PageInfo {
  hasNextPage: Boolean!
  endCursor: String
}

enum Role {
  ADMIN
  MEMBER
  GUEST
}

union Actor = User

input UserFilter {
  role: Role = MEMBER
  nameContains: String
}

directive @auth(requires: Role = ADMIN) on FIELD_DEFINITION | OBJECT

schema {
  query: Query
}

type Query {
  node(id: ID!): Node
  users(filter: UserFilter): UserConnection @auth
}
"#;

pub const SIMPLE_QUERY: &str = "{ user { id name } }";

pub const COMPLEX_QUERY: &str = r#"
query Search($term: String!, $first: Int = 25, $includeBio: Boolean!) {
  search(term: $term, first: $first) {
    # connection fields
    totalCount
    edges {
      cursor
      node {
        ... on User {
          id
          displayName: name
          bio @include(if: $includeBio)
          friends(first: 5) {
            edges { node { id name } }
          }
        }
        ...repoParts @skip(if: false)
      }
    }
    pageInfo { hasNextPage endCursor }
  }
}

fragment repoParts on Repository {
  name
  owner { id }
  labels(filter: {color: RED, limit: [1, 2, 3]}) { name }
}
"#;

/// A schema large enough to exercise allocation behavior: many types,
/// each with several fields and arguments.
pub fn large_schema() -> String {
    let mut schema = String::with_capacity(256 * 1024);
    schema.push_str("schema { query: Query0 }\n");
    for i in 0..400 {
        schema.push_str(&format!(
            "\"Generated type {i}.\"\n\
            type Query{i} implements Node {{\n\
            \x20 id: ID!\n\
            \x20 field{i}(a: Int = {i}, b: String): [Query{next}!]\n\
            \x20 scalarField: Float @cached\n\
            }}\n",
            next = (i + 1) % 400,
        ));
    }
    schema.push_str("interface Node { id: ID! }\n");
    schema.push_str("directive @cached on FIELD_DEFINITION\n");
    schema
}
