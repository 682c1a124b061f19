// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

// Headers used in aws iot publish.
pub const X_AMZ_DATE: &str = "x-amz-date";

/// SigV4 algorithm identifier.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
/// Terminator of every credential scope.
pub const AWS4_REQUEST: &str = "aws4_request";
/// Names of the signed headers, in canonical order.
pub const SIGNED_HEADERS: &str = "content-type;host;x-amz-date";

/// Payload published when none is given on the command line.
pub const DEFAULT_PAYLOAD: &str = "Hello World";

// Env values used by the publisher.
pub const ENV_METHOD: &str = "method";
pub const ENV_ACCESS_KEY: &str = "accesskey";
pub const ENV_SECRET_KEY: &str = "secretkey";
pub const ENV_REGION: &str = "region";
pub const ENV_SERVICE: &str = "service";
pub const ENV_CONTENT_TYPE: &str = "contenttype";
pub const ENV_HOST: &str = "host";
pub const ENV_ENDPOINT: &str = "endpoint";
pub const ENV_CANONICAL_URI: &str = "canonicaluri";
pub const ENV_CANONICAL_QUERY_STRING: &str = "canonicalquerystring";
