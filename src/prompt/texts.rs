//! The built-in prompt bodies (ICE POT format: Instructions, Context,
//! Example, Persona, Output Format, Tone).
//!
//! These are data, not logic. The text is reproduced exactly as shipped,
//! including its indentation; rendering trims the leading and trailing
//! whitespace. Placeholders use `${name}` syntax — see [`super::substitute`].

/// Selenium Java page object class, no test code.
pub(crate) const SELENIUM_JAVA_PAGE_ONLY: &str = r##"
    Instructions:
    - Generate ONLY a Selenium Java Page Object Class (no test code).
    - Add JavaDoc for methods & class.
    - Use Selenium 2.30+ compatible imports.
    - Use meaningful method names.
    - Do NOT include explanations or test code.

    Context:
    DOM:
    ```html
    ${domContent}
    ```

    Example:
    ```java
    package com.testleaf.pages;

    /**
     * Page Object for Component Page
     */
    public class ComponentPage {
        // Add methods as per the DOM
    }
    ```

    Persona:
    - Audience: Automation engineer focusing on maintainable POM structure.

    Output Format:
    - A single Java class inside a ```java``` block.

    Tone:
    - Clean, maintainable, enterprise-ready.
  "##;

/// Playwright TypeScript page object class, no test code.
pub(crate) const PLAYWRIGHT_TYPESCRIPT_PAGE_ONLY: &str = r##"
    Instructions:
    - Generate ONLY a Playwright Typescript Page Object Class (no test code).
    - Add JavaDoc for methods & class.
    - Use Plawright 1.56 compatible imports.
    - Use meaningful method names.
    - Do NOT include explanations or test code.
    - Follow Locator Strategies
        - Prefer locators in below hierarchy
            - Use ID only when it is unique and do not have numbers in it
            - Use NAME only ID is not present and when it is unique
            - Prefer user-facing attributes to XPath or CSS selectors
            - Use Data Attributes for Stability
        - use Playwright's built in locators. Locators come with auto waiting and retry-ability
        - Use chaining and filtering
        - Use locators that are resilient to changes in the DOM
        - Avoid Brittle Selectors
        - Use Regular Expressions for Flexible Text Matching
        - Keep Selectors Short and Readable
    - Use auto-healing selectors where applicable

    Context:
    DOM:
    ```html
    ${domContent}
    ```

    Example:
    ```typescript
    package com.testleaf.pages;

    /**
     * Page Object for Component Page
     */
    public class ComponentPage {
        // Add methods as per the DOM
    }
    ```

    Persona:
    - Audience: Automation engineer focusing on maintainable POM structure.

    Output Format:
    - A single typescript class inside a ```typescript``` block.

    Tone:
    - Clean, maintainable, enterprise-ready.
  "##;

/// Cucumber feature file only.
pub(crate) const CUCUMBER_ONLY: &str = r##"
    Instructions:
    - Generate ONLY a Cucumber (.feature) file.
    - Use Scenario Outline with Examples table.
    - Make sure every step is relevant to the provided DOM.
    - Do not combine multiple actions into one step.
    - Use South India realistic dataset (names, addresses, pin codes, mobile numbers).
    - Use dropdown values only from provided DOM.
    - Generate multiple scenarios if applicable.

    Context:
    DOM:
    ```html
    ${domContent}
    ```

    Example:
    ```gherkin
    Feature: Login to OpenTaps

    Scenario Outline: Successful login with valid credentials
      Given I open the login page
      When I type "<username>" into the Username field
      And I type "<password>" into the Password field
      And I click the Login button
      Then I should be logged in successfully

    Examples:
      | username   | password  |
      | "testuser" | "testpass"|
      | "admin"    | "admin123"|
    ```

    Persona:
    - Audience: BDD testers who only need feature files.

    Output Format:
    - Only valid Gherkin in a ```gherkin``` block.

    Tone:
    - Clear, structured, executable.
  "##;

/// Cucumber feature file plus Selenium Java step definitions.
///
/// References `${pageUrl}` twice: once in the Context block and once inside
/// the example step-definition code.
pub(crate) const CUCUMBER_WITH_SELENIUM_JAVA_STEPS: &str = r##"
    Instructions:
    - Generate BOTH:
      1. A Cucumber .feature file.
      2. A Java step definition class for selenium.
    - Do NOT include Page Object code.
    - Step defs must include WebDriver setup, explicit waits, and actual Selenium code.
    - Use Scenario Outline with Examples table (South India realistic data).

    Context:
    DOM:
    ```html
    ${domContent}
    ```
    URL: ${pageUrl}

    Example:
    ```gherkin
    Feature: Login to OpenTaps

    Scenario Outline: Successful login with valid credentials
      Given I open the login page
      When I type "<username>" into the Username field
      And I type "<password>" into the Password field
      And I click the Login button
      Then I should be logged in successfully

    Examples:
      | username   | password  |
      | "admin"    | "admin123"|
    ```

    ```java
    package com.leaftaps.stepdefs;

    import io.cucumber.java.en.*;
    import org.openqa.selenium.*;
    import org.openqa.selenium.chrome.ChromeDriver;
    import org.openqa.selenium.support.ui.*;

    public class LoginStepDefinitions {
        private WebDriver driver;
        private WebDriverWait wait;

        @io.cucumber.java.Before
        public void setUp() {
            driver = new ChromeDriver();
            wait = new WebDriverWait(driver, Duration.ofSeconds(10));
            driver.manage().window().maximize();
        }

        @io.cucumber.java.After
        public void tearDown() {
            if (driver != null) driver.quit();
        }

        @Given("I open the login page")
        public void openLoginPage() {
            driver.get("${pageUrl}");
        }

        @When("I type {string} into the Username field")
        public void enterUsername(String username) {
            WebElement el = wait.until(ExpectedConditions.elementToBeClickable(By.id("username")));
            el.sendKeys(username);
        }

        @When("I type {string} into the Password field")
        public void enterPassword(String password) {
            WebElement el = wait.until(ExpectedConditions.elementToBeClickable(By.id("password")));
            el.sendKeys(password);
        }

        @When("I click the Login button")
        public void clickLogin() {
            driver.findElement(By.xpath("//button[contains(text(),'Login')]")).click();
        }

        @Then("I should be logged in successfully")
        public void verifyLogin() {
            WebElement success = wait.until(ExpectedConditions.visibilityOfElementLocated(By.className("success")));
            assert success.isDisplayed();
        }
    }
    ```

    Persona:
    - Audience: QA engineers working with Cucumber & Selenium.

    Output Format:
    - Gherkin in ```gherkin``` block + Java code in ```java``` block.

    Tone:
    - Professional, executable, structured.
  "##;

/// Test data only, no code.
pub(crate) const TEST_DATA_ONLY: &str = r##"
    Instructions:
    - Generate ONLY Test data.
    - [CRITICAL] Generate data ONLY for the fields in the DOM [DO NOT add extra fields].
    - Identify field types based on labels, names, ids, and input types.
      - For dropdowns, use only the options available in the DOM.
      - For radio buttons and checkboxes, use the available options in the DOM.
      - For date fields, generate realistic dates (DD/MM/YYYY) within last 5 years.
      - For email fields, generate realistic email addresses.
      - For password fields, generate strong passwords (min 8 chars, mix of upper, lower, digits, special chars).
      - For numeric fields, generate realistic numbers within common ranges.
      - For text fields, generate realistic names, addresses, company names relevant to Manufacturing and construction domain.
      - Ensure data variety across different sets.
      - Ensure data consistency within each set (e.g., matching city and pin code).
    - generate realistic dataset as in UK region (names, addresses, pin codes, mobile numbers).
    - Generate Test data more specific to Manufacturing and construction domain
    - [Mandatory] Generate only unique Test data
    - Generate 5 sets of data only
    - Synthetically generate the Sensitive and customer PII data
    - Follow these rules strictly:
    Context:
    DOM:
    ```html
    ${domContent}
    ```

    Example:
    Below are only few examples, please generate based on the labels in the DOM.
    Login : alex.graham @ hotmail.com
    Password : Test@123
    Name : Alexander Graham
    Address : 59 Spectrum Avenue , East Ham, London
    Pin Code : Rg14 7NQ
    Mobile Number : 0740101010
    Company Name : Jewson Ltd

    Persona:
    - Audience: QA Engineers who only need Test data.

    Output Format:
    - Simple text beautifully structured.

    Tone:
    - Clear, structured, executable.
  "##;
